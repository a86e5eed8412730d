//! Integration tests for session-gated navigation
//!
//! The mounted stack is a pure function of the session: MainStack exactly
//! when the session is Authenticated. The timeline tests drive the splash,
//! the startup sequencer and the session holder together on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use dasper::logic::navigation::{root_view, select_stack, stack_changed};
use dasper::model::{Model, RootView, SessionState, StackId, UserProfile};
use dasper::services::{
    spawn_startup, EndpointConfig, EndpointResolutionError, EndpointResolver, SessionHolder,
    SplashHandle, StartupSequencer,
};
use dasper::ColorScheme;
use tokio::time::{sleep, Instant};

fn user() -> UserProfile {
    serde_json::from_str(r#"{"_id": "1", "email": "ana@example.com", "full_name": "Ana Reyes"}"#)
        .unwrap()
}

struct Resolver {
    delay_ms: u64,
    ok: bool,
}

impl EndpointResolver for Resolver {
    async fn resolve(&self) -> Result<EndpointConfig, EndpointResolutionError> {
        sleep(Duration::from_millis(self.delay_ms)).await;
        if self.ok {
            Ok(EndpointConfig {
                base_url: "http://localhost:5000".to_string(),
                health: None,
            })
        } else {
            Err(EndpointResolutionError::NoCandidates)
        }
    }
}

fn view(splash: &SplashHandle, holder: &SessionHolder) -> RootView {
    root_view(splash.is_visible(), &holder.current())
}

#[test]
fn test_main_stack_iff_authenticated() {
    for state in [
        SessionState::Unknown,
        SessionState::Unauthenticated,
        SessionState::Authenticated(user()),
    ] {
        let expected = if matches!(state, SessionState::Authenticated(_)) {
            StackId::MainStack
        } else {
            StackId::AuthStack
        };
        assert_eq!(select_stack(&state), expected, "state {}", state.as_str());
        assert_eq!(root_view(false, &state), RootView::Stack(expected));
        assert_eq!(root_view(true, &state), RootView::Splash);
    }
}

#[test]
fn test_color_scheme_never_changes_stack() {
    for scheme in [ColorScheme::Dark, ColorScheme::Light] {
        let mut model = Model::new(scheme);
        assert_eq!(model.stack(), StackId::AuthStack);
        model.session = SessionState::Authenticated(user());
        assert_eq!(model.stack(), StackId::MainStack);
    }
}

#[test]
fn test_stack_changed_only_across_auth_boundary() {
    let signed_in = SessionState::Authenticated(user());
    let mut renamed = user();
    renamed.full_name = "Ana María Reyes".to_string();

    assert!(stack_changed(&SessionState::Unknown, &signed_in));
    assert!(stack_changed(&signed_in, &SessionState::Unauthenticated));
    assert!(!stack_changed(&SessionState::Unknown, &SessionState::Unauthenticated));
    assert!(!stack_changed(&signed_in, &SessionState::Authenticated(renamed)));
}

#[tokio::test(start_paused = true)]
async fn test_restored_session_lands_on_main_stack_after_splash() {
    let start = Instant::now();
    let holder = Arc::new(SessionHolder::new());
    let splash = SplashHandle::new();

    let rx = spawn_startup(StartupSequencer::new(
        Resolver { delay_ms: 800, ok: true },
        splash.clone(),
        Duration::from_millis(3000),
    ));

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(view(&splash, &holder), RootView::Splash);

    rx.await.unwrap();
    // Restore still in flight: Unknown mounts the auth stack
    assert_eq!(view(&splash, &holder), RootView::Stack(StackId::AuthStack));

    let mut session_rx = holder.subscribe();
    let writer = holder.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(500)).await;
        writer.set(SessionState::Authenticated(user()));
    });

    session_rx.changed().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(3500) && elapsed < Duration::from_millis(3510));
    assert_eq!(view(&splash, &holder), RootView::Stack(StackId::MainStack));
}

#[tokio::test(start_paused = true)]
async fn test_failed_resolution_lands_on_auth_stack() {
    let holder = Arc::new(SessionHolder::new());
    let splash = SplashHandle::new();

    let outcome = spawn_startup(StartupSequencer::new(
        Resolver { delay_ms: 500, ok: false },
        splash.clone(),
        Duration::from_millis(3000),
    ))
    .await
    .unwrap();

    assert!(outcome.endpoint.is_none());
    holder.set(SessionState::Unauthenticated);
    assert_eq!(view(&splash, &holder), RootView::Stack(StackId::AuthStack));
}

#[tokio::test]
async fn test_sign_out_remounts_auth_stack() {
    let holder = SessionHolder::new();
    let mut rx = holder.subscribe();

    holder.set(SessionState::Authenticated(user()));
    rx.changed().await.unwrap();
    assert_eq!(select_stack(&rx.borrow_and_update()), StackId::MainStack);

    holder.set(SessionState::Unauthenticated);
    rx.changed().await.unwrap();
    assert_eq!(select_stack(&rx.borrow_and_update()), StackId::AuthStack);
}
