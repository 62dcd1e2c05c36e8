//! Command dispatch.

use tokio::task::JoinHandle;

use tracing::instrument;

use crate::{
    commands::{Command, Context, help},
    render::{self, ListView},
    screen::{Outcome, UserSource},
};

/// What the prompt should do after a command.
#[derive(Debug)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// A mutation was started in the background.
    Pending(JoinHandle<Outcome>),
    /// Stop reading commands.
    Quit,
}

/// Mutations started from the prompt that have not been awaited yet.
#[derive(Debug, Default)]
pub struct Pending {
    handles: Vec<JoinHandle<Outcome>>,
}

impl Pending {
    /// Tracks the flow of a command.
    ///
    /// Returns `false` once the prompt should stop reading commands.
    pub fn track(&mut self, flow: Flow) -> bool {
        self.handles.retain(|handle| !handle.is_finished());

        match flow {
            Flow::Continue => true,
            Flow::Pending(handle) => {
                self.handles.push(handle);
                true
            }
            Flow::Quit => false,
        }
    }

    /// The number of mutations that may still be running.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Waits for every tracked mutation to settle.
    pub async fn finish(&mut self) {
        if !self.handles.is_empty() {
            tracing::info!(count = self.handles.len(), "waiting on pending requests");
        }

        for handle in self.handles.drain(..) {
            if let Err(err) = handle.await {
                tracing::error!("request task failed: {}", err);
            }
        }
    }
}

/// Handles a command.
///
/// Mutations are spawned so the prompt stays responsive; the list is drawn
/// again once they finish.
#[instrument(skip(cx))]
pub fn command<S>(cx: &Context<S>, command: Command) -> Flow
where
    S: UserSource,
{
    match command {
        Command::Refresh | Command::Add if cx.is_busy() => {
            println!("still waiting on the last request");
            Flow::Continue
        }
        Command::Refresh => {
            let cx = cx.clone();
            let handle = tokio::spawn(async move {
                let outcome = cx.refresh().await;
                settle(&cx, outcome);
                outcome
            });

            // the spawned task may not have raised the flag yet
            println!("refreshing...");

            Flow::Pending(handle)
        }
        Command::Add => {
            let cx = cx.clone();
            Flow::Pending(tokio::spawn(async move {
                let outcome = cx.add_one().await;
                settle(&cx, outcome);
                outcome
            }))
        }
        Command::List => {
            show(cx);
            Flow::Continue
        }
        Command::Keys => {
            for user in cx.users() {
                println!("{}", render::key(&user));
            }
            Flow::Continue
        }
        Command::Help => {
            println!("{}", help());
            Flow::Continue
        }
        Command::Quit => Flow::Quit,
    }
}

/// Draws the list.
pub fn show<S>(cx: &Context<S>)
where
    S: UserSource,
{
    let users = cx.users();

    print!(
        "{}",
        ListView {
            users: &users,
            placement: cx.config.display.avatar,
            refreshing: cx.is_refreshing(),
            show_avatars: cx.config.display.show_avatars,
        }
    );
}

fn settle<S>(cx: &Context<S>, outcome: Outcome)
where
    S: UserSource,
{
    match outcome {
        Outcome::Applied | Outcome::Failed => show(cx),
        Outcome::Busy => println!("still waiting on the last request"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use tokio::sync::Notify;

    use anyhow::Error;

    use futures_util::future::BoxFuture;

    use roster_model::user::{RawUser, User};

    use crate::{config::Config, screen::UserList};

    /// Numbers users in the order they are generated.
    #[derive(Default)]
    struct Counter(std::sync::atomic::AtomicU32);

    impl UserSource for Counter {
        fn fetch_users(&self, size: u32) -> BoxFuture<'_, Result<Vec<User>, Error>> {
            use std::sync::atomic::Ordering;

            let users = (0..size)
                .map(|_| {
                    let n = self.0.fetch_add(1, Ordering::Relaxed);
                    User::from(RawUser {
                        uid: Some(format!("u{n}").into()),
                        first_name: Some("User".into()),
                        last_name: Some(n.to_string()),
                        ..Default::default()
                    })
                })
                .collect();

            Box::pin(async move { Ok(users) })
        }
    }

    /// Counts users, but holds every request until released.
    #[derive(Default)]
    struct Gated {
        counter: Counter,
        entered: Notify,
        release: Notify,
    }

    impl UserSource for Arc<Gated> {
        fn fetch_users(&self, size: u32) -> BoxFuture<'_, Result<Vec<User>, Error>> {
            Box::pin(async move {
                self.entered.notify_one();
                self.release.notified().await;
                self.counter.fetch_users(size).await
            })
        }
    }

    fn context() -> Context<Counter> {
        Context::new(
            UserList::new(Counter::default(), 3),
            Arc::new(Config::default()),
        )
    }

    async fn finish(flow: Flow) -> Outcome {
        match flow {
            Flow::Pending(handle) => handle.await.expect("task"),
            other => panic!("expected pending flow, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn add_and_refresh_run_in_background() {
        let cx = context();

        assert_eq!(cx.load_initial().await, Outcome::Applied);
        assert_eq!(cx.len(), 3);

        assert_eq!(finish(command(&cx, Command::Add)).await, Outcome::Applied);
        let uids = cx.users().into_iter().map(|u| u.uid.to_string()).collect::<Vec<_>>();
        assert_eq!(uids, ["u3", "u0", "u1", "u2"]);

        assert_eq!(finish(command(&cx, Command::Refresh)).await, Outcome::Applied);
        let uids = cx.users().into_iter().map(|u| u.uid.to_string()).collect::<Vec<_>>();
        assert_eq!(uids, ["u4", "u5", "u6"]);
    }

    #[tokio::test]
    async fn quit_stops_the_prompt() {
        let cx = context();

        assert!(matches!(command(&cx, Command::Quit), Flow::Quit));
        assert!(matches!(command(&cx, Command::List), Flow::Continue));
        assert!(matches!(command(&cx, Command::Help), Flow::Continue));
    }

    async fn gated_context() -> (Arc<Gated>, Context<Arc<Gated>>) {
        let gated = Arc::new(Gated::default());
        let cx = Context::new(UserList::new(gated.clone(), 2), Arc::new(Config::default()));

        gated.release.notify_one();
        assert_eq!(cx.load_initial().await, Outcome::Applied);
        gated.entered.notified().await;

        (gated, cx)
    }

    #[tokio::test]
    async fn quit_waits_for_requests_in_flight() {
        let (gated, cx) = gated_context().await;
        let mut pending = Pending::default();

        assert!(pending.track(command(&cx, Command::Add)));
        assert!(!pending.track(command(&cx, Command::Quit)));
        assert_eq!(pending.len(), 1);

        gated.entered.notified().await;
        assert!(cx.is_busy());
        gated.release.notify_one();

        pending.finish().await;
        assert!(pending.is_empty());

        let uids = cx.users().into_iter().map(|u| u.uid.to_string()).collect::<Vec<_>>();
        assert_eq!(uids, ["u2", "u0", "u1"]);
    }

    #[tokio::test]
    async fn gestures_while_busy_are_turned_away() {
        let (gated, cx) = gated_context().await;
        let mut pending = Pending::default();

        assert!(pending.track(command(&cx, Command::Refresh)));
        gated.entered.notified().await;

        assert!(matches!(command(&cx, Command::Refresh), Flow::Continue));
        assert!(matches!(command(&cx, Command::Add), Flow::Continue));
        assert_eq!(pending.len(), 1);

        gated.release.notify_one();
        pending.finish().await;

        let uids = cx.users().into_iter().map(|u| u.uid.to_string()).collect::<Vec<_>>();
        assert_eq!(uids, ["u2", "u3"]);
        assert!(!cx.is_busy());
    }
}
