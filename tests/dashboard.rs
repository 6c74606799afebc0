mod common;

use std::path::PathBuf;
use std::sync::Arc;

use common::{FakeGateway, RecordingMultiplexer, RecordingScreen, HOST_SESSION};
use compose_deck::action::Action;
use compose_deck::app::{App, OutputKind, Panel, RightView};
use compose_deck::config::DisplayConfig;
use compose_deck::docker::ComposeCommand;
use compose_deck::keymap::KeyMap;
use compose_deck::models::{ContainerRecord, ContainerStatus, Project, VolumeRecord};
use compose_deck::monitor::MonitorHandle;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        path: PathBuf::from("/srv").join(name),
    }
}

fn container(id: &str, name: &str) -> ContainerRecord {
    ContainerRecord::new(id, name).with_status(ContainerStatus::Running)
}

async fn app_with(
    gateway: &Arc<FakeGateway>,
    mux: &RecordingMultiplexer,
    display: DisplayConfig,
    projects: Vec<Project>,
) -> App {
    App::new(
        gateway.clone(),
        Box::new(mux.clone()),
        MonitorHandle::detached(),
        KeyMap::default(),
        display,
        projects,
    )
    .await
}

#[tokio::test]
async fn compose_up_relays_the_last_stderr_lines() {
    let gateway = FakeGateway::new();
    gateway.set_compose_script(
        "for i in 1 2 3 4 5; do echo \"  step $i  \" >&2; done; echo ignored",
    );
    let mux = RecordingMultiplexer::default();
    let display = DisplayConfig {
        max_stdout_lines: 3,
        ..Default::default()
    };
    let mut app = app_with(&gateway, &mux, display, vec![project("web")]).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::ComposeUp, &mut screen).await.unwrap();

    assert_eq!(gateway.compose_calls(), vec![("web".to_string(), ComposeCommand::Up)]);
    assert_eq!(app.output.texts(), vec!["step 3", "step 4", "step 5"]);
    assert!(app.output.lines().all(|l| l.kind == OutputKind::Process));

    // One draw for the banner, one per line, one after EOF
    assert_eq!(screen.draws, 7);
    assert_eq!(screen.output_at_draw[1].last().map(String::as_str), Some("step 1"));

    let outcome = app.compose_status.as_ref().unwrap();
    assert_eq!(outcome.project, "web");
    assert_eq!(outcome.code, Some(0));
}

#[tokio::test]
async fn compose_exit_code_is_kept_out_of_the_output() {
    let gateway = FakeGateway::new();
    gateway.set_compose_script("echo 'no such service' >&2; exit 2");
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), vec![project("web")]).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::ComposeDown, &mut screen).await.unwrap();

    assert_eq!(app.output.texts(), vec!["docker compose down...", "no such service"]);
    let outcome = app.compose_status.as_ref().unwrap();
    assert_eq!(outcome.command, ComposeCommand::Down);
    assert_eq!(outcome.code, Some(2));
    assert!(!outcome.success());
}

#[tokio::test]
async fn compose_needs_left_focus_and_a_project() {
    let gateway = FakeGateway::new();
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::ComposeUp, &mut screen).await.unwrap();
    assert!(gateway.compose_calls().is_empty());
    assert_eq!(screen.draws, 0);
}

#[tokio::test]
async fn failed_refresh_keeps_the_previous_snapshot() {
    let gateway = FakeGateway::new();
    gateway.set_containers(vec![container("a1", "web-1"), container("b2", "db-1")]);
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), Vec::new()).await;
    let mut screen = RecordingScreen::default();
    assert_eq!(app.snapshot.containers.len(), 2);

    gateway.set_unreachable(true);
    app.handle_action(Action::MoveDown, &mut screen).await.unwrap();
    app.handle_action(Action::MoveUp, &mut screen).await.unwrap();

    assert_eq!(app.snapshot.containers.len(), 2);
    let failures: Vec<_> = app
        .output
        .lines()
        .filter(|l| l.kind == OutputKind::Failure)
        .collect();
    assert_eq!(failures.len(), 1, "a persisting failure is reported once");
    assert!(failures[0].text.starts_with("Refresh failed"));
}

#[tokio::test]
async fn logs_view_pages_and_falls_back_when_containers_vanish() {
    let gateway = FakeGateway::new();
    gateway.set_containers(vec![container("a1", "web-1")]);
    gateway.set_logs("a1", (1..=45).map(|i| format!("log line {i}")).collect());
    let mux = RecordingMultiplexer::default();
    let display = DisplayConfig {
        max_logs_display: 10,
        ..Default::default()
    };
    let mut app = app_with(&gateway, &mux, display, Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::SwitchPanel, &mut screen).await.unwrap();
    app.handle_action(Action::ViewLogs, &mut screen).await.unwrap();
    assert_eq!(app.nav.active_view, RightView::Logs);
    assert_eq!(app.logs.len(), 45);
    assert_eq!(app.logs_container, "web-1");

    app.handle_action(Action::LogsEnd, &mut screen).await.unwrap();
    assert_eq!(app.nav.log_offset, 35);
    app.handle_action(Action::LogsPageDown, &mut screen).await.unwrap();
    assert_eq!(app.nav.log_offset, 35);
    app.handle_action(Action::LogsHome, &mut screen).await.unwrap();
    assert_eq!(app.nav.log_offset, 0);

    gateway.set_containers(Vec::new());
    app.handle_action(Action::MoveDown, &mut screen).await.unwrap();
    assert_eq!(app.nav.active_view, RightView::Containers);
}

#[tokio::test]
async fn leaving_logs_drops_the_stale_log() {
    let gateway = FakeGateway::new();
    gateway.set_containers(vec![container("a1", "web-1")]);
    gateway.set_logs("a1", (1..=45).map(|i| format!("log line {i}")).collect());
    let mux = RecordingMultiplexer::default();
    let display = DisplayConfig {
        max_logs_display: 10,
        ..Default::default()
    };
    let mut app = app_with(&gateway, &mux, display, Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::SwitchPanel, &mut screen).await.unwrap();
    app.handle_action(Action::ViewLogs, &mut screen).await.unwrap();
    assert_eq!(app.logs.len(), 45);

    app.handle_action(Action::ViewContainers, &mut screen).await.unwrap();
    assert!(app.logs.is_empty());
    app.handle_action(Action::LogsEnd, &mut screen).await.unwrap();
    assert_eq!(app.nav.log_offset, 0);

    app.handle_action(Action::ViewLogs, &mut screen).await.unwrap();
    assert_eq!(app.nav.log_offset, 0);
    assert_eq!(app.logs.len(), 45);
}

#[tokio::test]
async fn terminal_opens_in_a_pane() {
    let gateway = FakeGateway::new();
    gateway.set_containers(vec![container("a1", "web-1")]);
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::ContainerTerminal, &mut screen).await.unwrap();

    assert!(app.nav.terminal_overlay);
    assert_eq!(
        mux.panes.lock().unwrap().clone(),
        vec!["docker exec -it a1 /bin/bash".to_string()]
    );

    app.handle_action(Action::DefaultView, &mut screen).await.unwrap();
    assert!(!app.nav.terminal_overlay);
}

#[tokio::test]
async fn page_up_outside_logs_stops_the_monitor() {
    let gateway = FakeGateway::new();
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::LogsPageUp, &mut screen).await.unwrap();

    assert_eq!(
        app.output.last().map(|l| l.text.as_str()),
        Some("Health monitor is not running")
    );
}

#[tokio::test]
async fn quit_ends_the_hosting_session() {
    let gateway = FakeGateway::new();
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), Vec::new()).await;
    let mut screen = RecordingScreen::default();

    app.handle_action(Action::Quit, &mut screen).await.unwrap();
    assert!(app.should_quit);

    app.end_session();
    assert_eq!(mux.killed.lock().unwrap().clone(), vec![HOST_SESSION.to_string()]);
}

#[tokio::test]
async fn renders_every_view() {
    let gateway = FakeGateway::new();
    gateway.set_containers(vec![container("a1", "web-1")]);
    gateway.set_volumes(vec![VolumeRecord {
        name: "pgdata".to_string(),
        driver: "local".to_string(),
        mountpoint: "/var/lib/docker/volumes/pgdata/_data".to_string(),
        containers: vec!["web-1".to_string()],
    }]);
    gateway.set_logs("a1", vec!["hello".to_string()]);
    let mux = RecordingMultiplexer::default();
    let mut app = app_with(&gateway, &mux, DisplayConfig::default(), vec![project("web")]).await;
    let mut screen = RecordingScreen::default();
    let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();

    let mut draw = |app: &mut App| -> String {
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    };

    let text = draw(&mut app);
    assert!(text.contains("Projects"));
    assert!(text.contains("web-1"));

    app.handle_action(Action::SwitchPanel, &mut screen).await.unwrap();
    assert_eq!(app.nav.focused_panel, Panel::Right);
    app.handle_action(Action::ViewLogs, &mut screen).await.unwrap();
    let text = draw(&mut app);
    assert!(text.contains("Log Inspection (1-1 of 1)"));

    app.handle_action(Action::ViewVolumes, &mut screen).await.unwrap();
    let text = draw(&mut app);
    assert!(text.contains("pgdata"));

    app.handle_action(Action::ContainerTerminal, &mut screen).await.unwrap();
    let text = draw(&mut app);
    assert!(text.contains("Container Terminal"));
}
