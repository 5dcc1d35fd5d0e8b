// platform-free logic behind the home screen
//
// nothing in here touches the browser, so the whole crate is testable on the host
pub mod activity;
pub mod collection;
pub mod config;
pub mod feed;
pub mod greeting;
pub mod home;
pub mod locale;
pub mod session;
pub mod sticky;
pub mod tab;
pub mod tips;
