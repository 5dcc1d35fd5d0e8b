use api::auth::{AuthInfo, UserId};
use rand::Rng;
use tracing::debug;

use crate::{
    activity::ActivityLabel,
    collection::DocumentCollection,
    config::HomeConfig,
    feed::FeedQuery,
    greeting::Greeting,
    session::SessionTimestamp,
    tab::HomeTab,
    tips::sample_tip,
};

// everything the home screen reads on a render
pub struct HomeInputs<'a> {
    pub auth: &'a AuthInfo,
    pub previous_session: &'a SessionTimestamp,
    pub documents: &'a DocumentCollection,
    pub hour: u32,
    pub path: &'a str,
    pub language_prompt_dismissed: bool,
}

// the line under the greeting
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HelpLine {
    Activity(String),
    Tip(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub greeting: Greeting,
    pub help: HelpLine,
    pub tab: HomeTab,
    pub user: UserId,
    pub show_language_prompt: bool,
}

impl HomeView {
    pub fn heading(&self) -> String {
        format!("{}!", self.greeting)
    }

    // the only fetch the screen asks for: the active tab's feed
    pub fn feed(&self) -> FeedQuery {
        self.tab.feed(&self.user)
    }
}

// where the home screen sends the one feed it wants loaded
pub trait DocumentService {
    fn fetch(&mut self, query: FeedQuery);
}

// one mounted home screen
//
// the tip is drawn when the screen is created and then held, so re-renders
// within a mount always show the same one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeScreen {
    tip: String,
    recent_cap: usize,
}

impl HomeScreen {
    pub fn new<R>(config: &HomeConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let tip = sample_tip(&config.tips, rng);
        debug!({ tip = tip.as_str() }, "mounted home screen");

        HomeScreen {
            tip,
            recent_cap: config.recent_cap.max(1),
        }
    }

    pub fn tip(&self) -> &str {
        &self.tip
    }

    // None until both user and team are known, which renders as nothing and
    // leaves the service untouched
    pub fn render<S>(&self, inputs: &HomeInputs<'_>, service: &mut S) -> Option<HomeView>
    where
        S: DocumentService + ?Sized,
    {
        let (user, _team) = inputs.auth.identity()?;

        let recent = inputs.documents.updated_since(inputs.previous_session);
        let label = ActivityLabel::for_count(recent.len(), self.recent_cap);

        let help = match label.message() {
            Some(message) => HelpLine::Activity(message),
            None => HelpLine::Tip(self.tip.clone()),
        };

        let view = HomeView {
            greeting: Greeting::for_hour(inputs.hour),
            help,
            tab: HomeTab::from_path(inputs.path),
            user: user.id.clone(),
            show_language_prompt: !inputs.language_prompt_dismissed,
        };

        service.fetch(view.feed());

        Some(view)
    }
}
