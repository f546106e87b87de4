// SPDX-License-Identifier: MPL-2.0
use iced::{Point, Rectangle, Size};
use kiosk_dash::app::Screen;
use kiosk_dash::config::{self, Config};
use kiosk_dash::i18n::fluent::I18n;
use kiosk_dash::ui::auth::form::Submission;
use kiosk_dash::ui::auth::{login, register};
use kiosk_dash::ui::kiosk::{KioskEvent, KioskMode, Mode};
use kiosk_dash::ui::notifications::ExpiringNotification;
use kiosk_dash::ui::panels::{Controller, LayoutRegions, PanelId, Region};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn kiosk_announces_then_hides_after_configured_delays() {
    let config = Config::default();
    let mut kiosk = KioskMode::new(config.kiosk.announce_delay(), config.kiosk.notification_hide_delay());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    kiosk.subscribe(move |event| sink.lock().unwrap().push(*event));

    let t0 = Instant::now();
    kiosk.enable(t0);
    assert_eq!(kiosk.mode(), Mode::Enabled);

    kiosk.tick(t0 + ms(100));
    assert!(kiosk.is_notification_visible());

    kiosk.tick(t0 + ms(3100));
    assert!(!kiosk.is_notification_visible());
    assert_eq!(kiosk.mode(), Mode::Enabled);

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            KioskEvent::ModeToggled(true),
            KioskEvent::NotificationShown,
            KioskEvent::NotificationHidden,
        ]
    );
}

#[test]
fn reshowing_notification_supersedes_previous_countdown() {
    let t0 = Instant::now();
    let mut notification = ExpiringNotification::new(ms(3000));

    notification.show(t0);
    notification.show(t0 + ms(2000));

    // The first countdown would have expired here.
    assert!(!notification.tick(t0 + ms(3000)));
    assert!(notification.is_visible());

    assert!(notification.tick(t0 + ms(5000)));
    assert!(!notification.is_visible());
}

#[test]
fn hide_cancels_pending_countdown() {
    let t0 = Instant::now();
    let mut notification = ExpiringNotification::new(ms(3000));
    notification.show(t0);
    notification.hide();

    assert!(!notification.has_pending_timer());
    assert!(!notification.tick(t0 + ms(3000)));
}

#[test]
fn login_with_short_password_stays_idle() {
    let mut form = login::State::new(8);
    let now = Instant::now();
    form.update(login::Message::EmailChanged("a@b.com".into()), now);
    form.update(login::Message::PasswordChanged("short".into()), now);

    let event = form.update(login::Message::Submit, now);

    assert_eq!(event, login::Event::Submitted(Submission::Invalid));
    assert!(!form.is_submitting());
}

#[test]
fn register_mismatch_short_circuits() {
    let mut form = register::State::new(8);
    let now = Instant::now();
    form.update(register::Message::EmailChanged("a@b.com".into()), now);
    form.update(register::Message::PasswordChanged("password-one".into()), now);
    form.update(
        register::Message::ConfirmPasswordChanged("password-two".into()),
        now,
    );

    let event = form.update(register::Message::Submit, now);

    assert_eq!(event, register::Event::Submitted(Submission::Mismatch));
    assert!(!form.is_submitting());
}

#[test]
fn outside_click_closes_user_menu_inside_click_keeps_it() {
    let surface = LayoutRegions::new()
        .with(
            Region::Toggle(PanelId::User),
            Rectangle::new(Point::new(1000.0, 8.0), Size::new(40.0, 40.0)),
        )
        .with(
            Region::Panel(PanelId::User),
            Rectangle::new(Point::new(820.0, 60.0), Size::new(220.0, 120.0)),
        );
    let mut controller = Controller::new();

    controller.open(PanelId::User);
    assert!(!controller.is_outside_interaction(PanelId::User, Point::new(900.0, 100.0), &surface));
    assert!(controller.is_open(PanelId::User));

    assert!(controller.is_outside_interaction(PanelId::User, Point::new(100.0, 400.0), &surface));
    assert!(!controller.is_open(PanelId::User));
}

#[test]
fn routes_resolve_to_screens() {
    assert_eq!(Screen::resolve("/login"), Screen::Login);
    assert_eq!(Screen::resolve("register"), Screen::Register);
    assert_eq!(Screen::resolve("/anything/else"), Screen::Dashboard);
}

#[test]
fn kiosk_timings_round_trip_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut config = Config::default();
    config.kiosk.notification_hide_ms = Some(5000);
    config.kiosk.announce_delay_ms = Some(250);
    config::save_to_path(&config, &dir.path().join("settings.toml"))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.kiosk.notification_hide_delay(), ms(5000));
    assert_eq!(loaded.kiosk.announce_delay(), ms(250));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("ru".to_string());
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_ne!(i18n.tr("window-title"), "Kiosk Dashboard");
}
