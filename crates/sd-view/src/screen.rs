//! One rendered route: the view a route shows, after its fetch cycle.

use sd_api::{LiveOptions, SpaceClient};
use sd_core::Session;
use sd_core::entities::{Agency, Astronaut, Launch, Program};
use sd_core::enums::{LaunchTab, ResourceKind};
use serde::Serialize;

use crate::cards::{Card, Cards, summary_cards};
use crate::cycle::{ViewController, ViewPayload};
use crate::route::Route;
use crate::state::{ViewMode, ViewPhase, ViewState, empty_message};

/// Fetch parameters shared by every view.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub limit: u32,
    pub tab: LaunchTab,
    pub live: LiveOptions,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            tab: LaunchTab::default(),
            live: LiveOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Landing,
    SignIn,
    SignUp,
    Profile { email: String },
    Launches { tab: LaunchTab, view: ViewState<Vec<Launch>> },
    Agencies { view: ViewState<Vec<Agency>> },
    Astronauts { view: ViewState<Vec<Astronaut>> },
    Programs { view: ViewState<Vec<Program>> },
    Agency { view: ViewState<Agency> },
    Astronaut { view: ViewState<Astronaut> },
    Program { view: ViewState<Program> },
    Launch { view: ViewState<Launch> },
}

impl Screen {
    /// Phase of the data view, if this screen has one.
    #[must_use]
    pub const fn phase(&self) -> Option<ViewPhase> {
        match self {
            Self::Landing | Self::SignIn | Self::SignUp | Self::Profile { .. } => None,
            Self::Launches { view, .. } => Some(view.phase()),
            Self::Agencies { view } => Some(view.phase()),
            Self::Astronauts { view } => Some(view.phase()),
            Self::Programs { view } => Some(view.phase()),
            Self::Agency { view } => Some(view.phase()),
            Self::Astronaut { view } => Some(view.phase()),
            Self::Program { view } => Some(view.phase()),
            Self::Launch { view } => Some(view.phase()),
        }
    }

    /// Cards to render: one summary per list item, or the single detail card.
    /// Empty unless the view is `Ready`.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        match self {
            Self::Launches { view, .. } => view.ready().map(|v| summary_cards(v)),
            Self::Agencies { view } => view.ready().map(|v| summary_cards(v)),
            Self::Astronauts { view } => view.ready().map(|v| summary_cards(v)),
            Self::Programs { view } => view.ready().map(|v| summary_cards(v)),
            Self::Agency { view } => view.ready().map(|r| vec![r.detail_card()]),
            Self::Astronaut { view } => view.ready().map(|r| vec![r.detail_card()]),
            Self::Program { view } => view.ready().map(|r| vec![r.detail_card()]),
            Self::Launch { view } => view.ready().map(|r| vec![r.detail_card()]),
            Self::Landing | Self::SignIn | Self::SignUp | Self::Profile { .. } => None,
        }
        .unwrap_or_default()
    }

    /// Inline message for `Error` and `Empty` states.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        let (phase, error) = match self {
            Self::Launches { view, .. } => (view.phase(), view.error()),
            Self::Agencies { view } => (view.phase(), view.error()),
            Self::Astronauts { view } => (view.phase(), view.error()),
            Self::Programs { view } => (view.phase(), view.error()),
            Self::Agency { view } => (view.phase(), view.error()),
            Self::Astronaut { view } => (view.phase(), view.error()),
            Self::Program { view } => (view.phase(), view.error()),
            Self::Launch { view } => (view.phase(), view.error()),
            Self::Landing | Self::SignIn | Self::SignUp | Self::Profile { .. } => return None,
        };
        match phase {
            ViewPhase::Error => error.map(|e| e.message.clone()),
            ViewPhase::Empty => self.list_kind().map(empty_message),
            ViewPhase::Loading | ViewPhase::Ready => None,
        }
    }

    #[must_use]
    pub const fn list_kind(&self) -> Option<ResourceKind> {
        match self {
            Self::Launches { .. } => Some(ResourceKind::Launch),
            Self::Agencies { .. } => Some(ResourceKind::Agency),
            Self::Astronauts { .. } => Some(ResourceKind::Astronaut),
            Self::Programs { .. } => Some(ResourceKind::Program),
            _ => None,
        }
    }
}

/// Run one fetch cycle for `route` on a fresh set of views.
///
/// Protected routes must already have passed the navigator's guard; the
/// session is only read here for the profile view.
pub async fn load(
    client: &SpaceClient,
    route: &Route,
    session: Option<&Session>,
    options: &LoadOptions,
) -> Screen {
    Views::default().load(client, route, session, options).await
}

/// One [`ViewController`] per view, reused across loads.
///
/// Reloading a route (refresh, a new tab, a new identifier, `back`) starts a
/// new cycle on the same controller, so generations keep increasing for the
/// lifetime of an interactive session.
#[derive(Debug, Default)]
pub struct Views {
    launches: Option<ViewController<Vec<Launch>>>,
    agencies: Option<ViewController<Vec<Agency>>>,
    astronauts: Option<ViewController<Vec<Astronaut>>>,
    programs: Option<ViewController<Vec<Program>>>,
    agency: Option<ViewController<Agency>>,
    astronaut: Option<ViewController<Astronaut>>,
    program: Option<ViewController<Program>>,
    launch: Option<ViewController<Launch>>,
}

impl Views {
    /// Generation of the view behind `kind` and `mode`; 0 before its first load.
    #[must_use]
    pub fn generation(&self, kind: ResourceKind, mode: ViewMode) -> u64 {
        match (kind, mode) {
            (ResourceKind::Launch, ViewMode::List) => generation_of(self.launches.as_ref()),
            (ResourceKind::Agency, ViewMode::List) => generation_of(self.agencies.as_ref()),
            (ResourceKind::Astronaut, ViewMode::List) => generation_of(self.astronauts.as_ref()),
            (ResourceKind::Program, ViewMode::List) => generation_of(self.programs.as_ref()),
            (ResourceKind::Agency, ViewMode::Detail) => generation_of(self.agency.as_ref()),
            (ResourceKind::Astronaut, ViewMode::Detail) => generation_of(self.astronaut.as_ref()),
            (ResourceKind::Program, ViewMode::Detail) => generation_of(self.program.as_ref()),
            (ResourceKind::Launch, ViewMode::Detail) => generation_of(self.launch.as_ref()),
        }
    }

    /// Run the fetch cycle for `route` and return the settled screen.
    pub async fn load(
        &mut self,
        client: &SpaceClient,
        route: &Route,
        session: Option<&Session>,
        options: &LoadOptions,
    ) -> Screen {
        let limit = options.limit;
        match route {
            Route::Landing => Screen::Landing,
            Route::SignIn => Screen::SignIn,
            Route::SignUp => Screen::SignUp,
            Route::Profile => Screen::Profile {
                email: session.map(|s| s.email.clone()).unwrap_or_default(),
            },
            Route::Home => Screen::Launches {
                tab: options.tab,
                view: settle(
                    controller(&mut self.launches, ResourceKind::Launch, ViewMode::List),
                    || client.list_launches(options.tab, limit, &options.live),
                )
                .await,
            },
            Route::Agencies => Screen::Agencies {
                view: settle(
                    controller(&mut self.agencies, ResourceKind::Agency, ViewMode::List),
                    || client.list_agencies(limit),
                )
                .await,
            },
            Route::Astronauts => Screen::Astronauts {
                view: settle(
                    controller(&mut self.astronauts, ResourceKind::Astronaut, ViewMode::List),
                    || client.list_astronauts(limit),
                )
                .await,
            },
            Route::Programs => Screen::Programs {
                view: settle(
                    controller(&mut self.programs, ResourceKind::Program, ViewMode::List),
                    || client.list_programs(limit),
                )
                .await,
            },
            Route::Agency(id) => Screen::Agency {
                view: settle(
                    controller(&mut self.agency, ResourceKind::Agency, ViewMode::Detail),
                    || client.get_agency(id),
                )
                .await,
            },
            Route::Astronaut(id) => Screen::Astronaut {
                view: settle(
                    controller(&mut self.astronaut, ResourceKind::Astronaut, ViewMode::Detail),
                    || client.get_astronaut(id),
                )
                .await,
            },
            Route::Program(id) => Screen::Program {
                view: settle(
                    controller(&mut self.program, ResourceKind::Program, ViewMode::Detail),
                    || client.get_program(id),
                )
                .await,
            },
            Route::Launch(id) => Screen::Launch {
                view: settle(
                    controller(&mut self.launch, ResourceKind::Launch, ViewMode::Detail),
                    || client.get_launch(id),
                )
                .await,
            },
        }
    }
}

fn generation_of<T: ViewPayload>(controller: Option<&ViewController<T>>) -> u64 {
    controller.map_or(0, ViewController::generation)
}

fn controller<T: ViewPayload>(
    slot: &mut Option<ViewController<T>>,
    resource: ResourceKind,
    mode: ViewMode,
) -> &mut ViewController<T> {
    slot.get_or_insert_with(|| ViewController::new(resource, mode))
}

async fn settle<T, F, Fut>(controller: &mut ViewController<T>, fetch: F) -> ViewState<T>
where
    T: ViewPayload + Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, sd_api::ApiError>>,
{
    let resolution = controller.run(fetch).await;
    tracing::debug!(
        resource = %controller.resource(),
        generation = controller.generation(),
        ?resolution,
        "fetch cycle settled"
    );
    controller.state().clone()
}
