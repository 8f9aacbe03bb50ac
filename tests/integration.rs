// SPDX-License-Identifier: MPL-2.0
use reey_notifications::behaviours::{self, DEFAULT_TIMEOUT};
use reey_notifications::config::{self, Config};
use reey_notifications::{
    Content, Context, Event, Level, Lifecycle, Manager, Message, NotificationData, Phase, Registry,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn setup() -> (Registry, Manager) {
    init_tracing();
    let mut registry = Registry::new();
    registry.register_default().expect("register");
    let manager = Manager::new(&registry).expect("manager");
    (registry, manager)
}

#[test]
fn auto_dismiss_runs_full_lifecycle() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(
            NotificationData::new()
                .title("Upload finished")
                .content(Content::markup("<b>3</b> files"))
                .level(Level::Success)
                .time(Some(ms(1000))),
        )
        .expect("create");
    let id = manager.add(item, 0, start);

    manager.handle_message(&Message::Tick(start + ms(500)), start + ms(500));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::CountingDown));

    manager.handle_message(&Message::Tick(start + ms(1500)), start + ms(1500));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Exiting));

    manager.handle_message(&Message::Tick(start + ms(1810)), start + ms(1810));
    assert!(manager.is_empty());
    assert_eq!(
        manager.take_events(),
        vec![
            Event {
                id,
                lifecycle: Lifecycle::Connected
            },
            Event {
                id,
                lifecycle: Lifecycle::Disconnected
            },
        ]
    );
}

#[test]
fn close_after_mouse_enter_replaces_countdown() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().title("Hover me"))
        .expect("create");
    let item = behaviours::close_after_mouse_enter(item, DEFAULT_TIMEOUT, false);
    let id = manager.add(item, 0, start);
    manager.tick(start + ms(500));

    manager.handle_message(&Message::PointerEntered(id), start + ms(600));
    let notification = manager.get(id).expect("present");
    assert_eq!(notification.time(), None);
    assert_eq!(notification.next_deadline(), Some(start + ms(1600)));

    manager.handle_message(&Message::PointerLeft(id), start + ms(700));
    manager.handle_message(&Message::PointerEntered(id), start + ms(800));
    manager.tick(start + ms(1599));
    assert!(manager.contains(id));

    manager.tick(start + ms(1600));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Exiting));
    manager.tick(start + ms(1910));
    assert!(!manager.contains(id));
}

#[test]
fn close_after_mouse_leave_schedules_on_every_leave() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().title("Leave me"))
        .expect("create");
    let item = behaviours::close_after_mouse_leave(item, DEFAULT_TIMEOUT, true);
    let id = manager.add(item, 0, start);
    manager.tick(start + ms(500));

    manager.handle_message(&Message::PointerEntered(id), start + ms(600));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Idle));

    manager.handle_message(&Message::PointerLeft(id), start + ms(700));
    manager.handle_message(&Message::PointerEntered(id), start + ms(1000));
    manager.handle_message(&Message::PointerLeft(id), start + ms(1200));

    manager.tick(start + ms(1699));
    assert!(manager.contains(id));

    // The first leave's removal is not postponed by the second one.
    manager.tick(start + ms(1700));
    assert!(!manager.contains(id));
}

#[test]
fn stacked_behaviours_keep_their_own_removals() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().title("Stacked"))
        .expect("create");
    let item = behaviours::close_after_mouse_enter(item, ms(1000), false);
    let item = behaviours::close_after_mouse_leave(item, ms(5000), false);
    let id = manager.add(item, 0, start);
    manager.tick(start + ms(500));

    manager.handle_message(&Message::PointerEntered(id), start + ms(600));
    manager.handle_message(&Message::PointerLeft(id), start + ms(700));

    manager.tick(start + ms(1600));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Exiting));
    manager.tick(start + ms(1910));
    assert!(!manager.contains(id));
}

#[test]
fn huge_time_keeps_notification_until_removed() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().time(Some(Duration::MAX)))
        .expect("create");
    let id = manager.add(item, 0, start);

    manager.tick(start + ms(500));
    manager.tick(start + ms(3_600_000));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Idle));
    assert!(!manager.is_active());

    manager.remove(id, true, start + ms(3_600_001));
    assert!(manager.is_empty());
}

#[test]
fn close_on_click_removes_immediately() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().title("Click me"))
        .expect("create");
    let id = manager.add(behaviours::close_on_click(item, true), 0, start);

    manager.handle_message(&Message::Clicked(id), start + ms(100));
    assert!(manager.is_empty());
}

#[test]
fn ensure_hover_holds_timer_until_first_leave() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().title("Read me").time(Some(ms(2000))))
        .expect("create");
    let id = manager.add(behaviours::ensure_hover(item), 0, start);

    manager.tick(start + ms(10_000));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Idle));

    manager.handle_message(&Message::PointerEntered(id), start + ms(10_000));
    manager.handle_message(&Message::PointerLeft(id), start + ms(11_000));
    assert_eq!(
        manager.get(id).and_then(|n| n.dismiss_deadline()),
        Some(start + ms(13_000))
    );

    manager.handle_message(&Message::PointerEntered(id), start + ms(11_500));
    manager.handle_message(&Message::PointerLeft(id), start + ms(12_000));
    assert_eq!(
        manager.get(id).and_then(|n| n.dismiss_deadline()),
        Some(start + ms(13_000))
    );

    manager.tick(start + ms(13_000));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Exiting));
}

#[test]
fn ensure_hover_without_time_is_inert() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let item = registry
        .create(NotificationData::new().time(None))
        .expect("create");
    let id = manager.add(behaviours::ensure_hover(item), 0, start);

    manager.handle_message(&Message::PointerEntered(id), start + ms(600));
    manager.handle_message(&Message::PointerLeft(id), start + ms(700));
    manager.tick(start + ms(60_000));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Idle));
}

#[test]
fn interactive_notification_removes_itself() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let mut dismiss = None;
    let item = registry
        .create_interactive(|remover| {
            dismiss = Some(remover.remove_immediately());
            NotificationData::new().title("Undo?").time(None)
        })
        .expect("create");
    let id = manager.add(item, -1, start);

    let message = dismiss.expect("builder ran");
    manager.handle_message(&message, start + ms(2000));
    assert!(!manager.contains(id));
}

#[test]
fn context_groups_are_removed_together() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let upload = Context::named("upload");

    for (title, in_group) in [("1", true), ("2", false), ("3", true)] {
        let mut data = NotificationData::new().title(title).time(None);
        if in_group {
            data = data.context(upload.clone());
        }
        manager.add(registry.create(data).expect("create"), -1, start);
    }
    manager.tick(start + ms(500));

    let grouped = manager.ids(Some(&Context::named("upload")));
    assert_eq!(grouped.len(), 2);

    manager.remove_with_context(&upload, false, start + ms(1000));
    for id in &grouped {
        assert_eq!(manager.get(*id).map(|n| n.phase()), Some(Phase::Exiting));
    }

    manager.tick(start + ms(1310));
    assert_eq!(manager.len(), 1);
    assert!(manager.ids(Some(&upload)).is_empty());
}

#[test]
fn setters_update_a_shown_notification() {
    let (registry, mut manager) = setup();
    let start = Instant::now();
    let id = manager.add(
        registry.create(NotificationData::new().title("Uploading")).expect("create"),
        0,
        start,
    );
    manager.tick(start + ms(500));

    manager.update(id, |n| {
        n.set_title("Uploaded");
        n.set_level(Level::Success);
        n.set_time(Some(ms(500)), start + ms(600));
    });
    let notification = manager.get(id).expect("present");
    assert_eq!(notification.title().as_text(), Some("Uploaded"));
    assert_eq!(notification.dismiss_deadline(), Some(start + ms(1100)));

    let rejected = manager.update(id, |n| n.set_level_name("bogus"));
    assert!(matches!(rejected, Some(Err(_))));
    assert_eq!(manager.get(id).map(|n| n.level()), Some(Level::Success));
}

#[test]
fn registry_from_saved_config() {
    init_tracing();
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = Config {
        name: Some("desk-toasts".to_string()),
        default_time_ms: Some(2500),
        default_level: Some(Level::Info),
        closeable: Some(false),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let registry = Registry::from_config(&loaded).expect("register");
    let manager = Manager::new(&registry).expect("manager");
    assert_eq!(manager.name(), "desk-toasts");

    let item = registry.create(registry.data().title("Hi")).expect("create");
    assert_eq!(item.time(), Some(ms(2500)));
    assert_eq!(item.level(), Level::Info);
    assert!(!item.closeable());

    dir.close().expect("Failed to close temporary directory");
}
