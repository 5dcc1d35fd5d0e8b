pub mod auth;
pub mod collection;
pub mod document;

// every message is a POST of the request struct to /docs/api/<Name>,
// answered with the matching response struct as json
//
// a non-2xx status carries the error text in the body
#[macro_export]
macro_rules! endpoint {
    ($name:ident) => {
        paste::paste! {
            pub async fn [<$name:snake>](req: &[<$name:camel Req>]) -> anyhow::Result<[<$name:camel Resp>]> {
                let resp = gloo_net::http::Request::post(format!("/docs/api/{}", stringify!([<$name:camel>])).as_str())
                    .json(&req.clone())?
                    .send()
                    .await?;

                if resp.ok() {
                    Ok(resp.json().await?)
                } else {
                    Err(anyhow::Error::msg(resp.text().await?))
                }
            }
        }
    };
}
