//! `spacedash browse`: an interactive session over stdin.
//!
//! Commands: `open <path>`, `select <n>`, `tab <name>`, `back`, `refresh`,
//! `login <email> <password>`, `logout`, `help`, `quit`.

use sd_core::enums::LaunchTab;
use sd_view::{NavOutcome, Navigator, Route, Screen, Views};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BrowseArgs;
use crate::commands::shared::view::load_screen;
use crate::context::AppContext;
use crate::output;

const HELP: &str = "commands: open <path> | select <n> | tab upcoming|previous|live | back | \
                    refresh | login <email> <password> | logout | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Open(String),
    Select(usize),
    Tab(LaunchTab),
    Back,
    Refresh,
    Login { email: String, password: String },
    Logout,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(HELP.to_string());
    };
    let args: Vec<&str> = words.collect();

    match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("open" | "o", [path]) => Ok(BrowseCommand::Open((*path).to_string())),
        ("select" | "s", [n]) => n
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0)
            .map(BrowseCommand::Select)
            .ok_or_else(|| format!("not a list position: {n}")),
        ("tab" | "t", [name]) => name
            .parse::<LaunchTab>()
            .map(BrowseCommand::Tab)
            .map_err(|error| error.to_string()),
        ("back" | "b", []) => Ok(BrowseCommand::Back),
        ("refresh" | "r", []) => Ok(BrowseCommand::Refresh),
        ("login", [email, password]) => Ok(BrowseCommand::Login {
            email: (*email).to_string(),
            password: (*password).to_string(),
        }),
        ("logout", []) => Ok(BrowseCommand::Logout),
        ("help" | "h" | "?", []) => Ok(BrowseCommand::Help),
        ("quit" | "q" | "exit", []) => Ok(BrowseCommand::Quit),
        _ => Err(format!("unrecognized command: {}\n{HELP}", line.trim())),
    }
}

struct Browser {
    nav: Navigator,
    views: Views,
    tab: LaunchTab,
    screen: Screen,
}

impl Browser {
    async fn go(&mut self, ctx: &AppContext, flags: &GlobalFlags, route: Route) {
        if let NavOutcome::Redirected { requested } = self.nav.navigate(route, ctx.session.session())
        {
            println!("{requested} needs a session; `login <email> <password>` to continue");
        }
        self.reload(ctx, flags).await;
    }

    async fn reload(&mut self, ctx: &AppContext, flags: &GlobalFlags) {
        let route = self.nav.current().clone();
        self.screen = load_screen(&mut self.views, ctx, flags, &route, self.tab).await;
    }

    fn render(&self, flags: &GlobalFlags) -> anyhow::Result<String> {
        let body = output::render_screen(&self.screen, flags.format)?;
        Ok(format!("── {} ──\n{body}", self.nav.current()))
    }
}

/// Handle `spacedash browse`.
pub async fn handle(
    args: &BrowseArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let start = Route::parse(&args.start)?;
    let mut browser = Browser {
        nav: Navigator::new(),
        views: Views::default(),
        tab: LaunchTab::default(),
        screen: Screen::Landing,
    };
    browser.go(ctx, flags, start).await;
    println!("{}\n\n{HELP}", browser.render(flags)?);

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            }
            BrowseCommand::Open(path) => match Route::parse(&path) {
                Ok(route) => {
                    browser.go(ctx, flags, route).await;
                }
                Err(error) => {
                    println!("{error}");
                    continue;
                }
            },
            BrowseCommand::Select(n) => {
                let cards = browser.screen.cards();
                if browser.screen.list_kind().is_none() {
                    println!("select works on list views");
                    continue;
                }
                let Some(card) = cards.get(n - 1) else {
                    println!("no item {n}; this view has {}", cards.len());
                    continue;
                };
                let outcome =
                    browser.nav.select(card.kind, card.id.clone(), ctx.session.session());
                tracing::debug!(route = %outcome.route(), "selected");
                browser.reload(ctx, flags).await;
            }
            BrowseCommand::Tab(tab) => {
                browser.tab = tab;
                if browser.nav.current() == &Route::Home {
                    browser.reload(ctx, flags).await;
                } else {
                    browser.go(ctx, flags, Route::Home).await;
                }
            }
            BrowseCommand::Back => {
                if browser.nav.back().is_none() {
                    println!("already at the first view");
                    continue;
                }
                browser.reload(ctx, flags).await;
            }
            BrowseCommand::Refresh => browser.reload(ctx, flags).await,
            BrowseCommand::Login { email, password } => {
                let result = ctx
                    .session
                    .login(&ctx.auth, &email, &password)
                    .await
                    .cloned();
                match result {
                    Ok(session) => {
                        println!("User logged in successfully");
                        browser.nav.resume_after_login(&session);
                        browser.reload(ctx, flags).await;
                    }
                    Err(error) => {
                        println!("Login failed: {error}");
                        continue;
                    }
                }
            }
            BrowseCommand::Logout => {
                ctx.session.logout()?;
                browser.nav.reset();
                browser.reload(ctx, flags).await;
            }
        }

        println!("{}", browser.render(flags)?);
    }

    Ok(())
}
