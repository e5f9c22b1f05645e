//! End-to-end tests of the watchface against a fake host.

mod common;

use chrono::Duration;
use common::{FakeHost, Screen};
use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use pinetime_watchface::{
    config,
    ui::angle::{battery_sweep, TrigAngle},
    BatteryChargeState, EventHandler, WatchEvent, WatchFace, Watchface,
};

fn pinetime_screen() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(config::LCD_W as u32, config::LCD_H as u32),
    )
}

#[test]
fn startup_and_disconnect_scenario() {
    // 2024-08-07 is a Wednesday
    let mut host = FakeHost::at(2024, 8, 7, 14, 7);
    host.battery = BatteryChargeState::new(42, false, false);
    host.connected = false;

    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);

    assert_eq!(face.clock().time(), "14:07");
    assert_eq!(face.clock().weekday(), "WED");
    assert_eq!(face.clock().day(), "07");
    assert_eq!(battery_sweep(face.battery().charge_percent), TrigAngle::from_degrees(151));

    let layers = face.layers().expect("window is loaded");
    assert_eq!(layers.time().text(), "14:07");
    assert!(layers.bluetooth().is_hidden());
    assert_eq!(host.pulses, 0);

    let mut screen = Screen::new(240, 240);
    assert_eq!(face.render(&mut screen), Ok(true));
    assert_eq!(screen.count(config::BLUETOOTH_COLOR), 0);
    assert!(screen.count(config::BATTERY_COLOR) > 0);
    assert!(screen.count(config::TIME_COLOR) > 0);

    face.handle(WatchEvent::ConnectionChanged(true), &mut host);
    assert!(!face.layers().unwrap().bluetooth().is_hidden());
    assert_eq!(face.render(&mut screen), Ok(true));
    assert!(screen.count(config::BLUETOOTH_COLOR) > 0);

    face.handle(WatchEvent::ConnectionChanged(false), &mut host);
    assert!(face.layers().unwrap().bluetooth().is_hidden());
    assert_eq!(host.pulses, 1);
    assert_eq!(face.render(&mut screen), Ok(true));
    assert_eq!(screen.count(config::BLUETOOTH_COLOR), 0);
}

#[test]
fn events_are_routed_to_callbacks() {
    let mut host = FakeHost::at(2024, 8, 7, 9, 59);
    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);

    face.handle(
        WatchEvent::MinuteTick(host.now + Duration::minutes(1)),
        &mut host,
    );
    assert_eq!(face.clock().time(), "10:00");

    face.handle(
        WatchEvent::BatteryChanged(BatteryChargeState::new(77, true, true)),
        &mut host,
    );
    assert_eq!(face.battery().charge_percent, 77);
    assert!(face.battery().is_charging);

    face.handle(WatchEvent::ConnectionChanged(true), &mut host);
    assert_eq!(face.connected(), Some(true));
}

#[test]
fn time_format_follows_live_preference() {
    let mut host = FakeHost::at(2024, 8, 7, 23, 15);
    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);
    assert_eq!(face.clock().time(), "23:15");

    host.is_24h = false;
    face.on_minute_tick(host.now + Duration::minutes(1), &mut host);
    assert_eq!(face.clock().time(), "11:16");

    host.is_24h = true;
    face.on_minute_tick(host.now + Duration::minutes(2), &mut host);
    assert_eq!(face.clock().time(), "23:17");
}

#[test]
fn only_dirty_frames_are_drawn() {
    let mut host = FakeHost::at(2024, 8, 7, 8, 0);
    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);

    let mut screen = Screen::new(240, 240);
    face.render(&mut screen).unwrap();
    face.render(&mut screen).unwrap();
    assert_eq!(screen.frames, 1);

    face.on_battery_change(BatteryChargeState::new(50, false, false), &mut host);
    face.on_battery_change(BatteryChargeState::new(51, false, false), &mut host);
    face.render(&mut screen).unwrap();
    assert_eq!(screen.frames, 2);
}

#[test]
fn battery_ring_tracks_charge() {
    let mut host = FakeHost::at(2024, 8, 7, 8, 0);
    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);
    let mut screen = Screen::new(240, 240);

    face.on_battery_change(BatteryChargeState::new(0, false, false), &mut host);
    face.render(&mut screen).unwrap();
    assert_eq!(screen.count(config::BATTERY_COLOR), 0);

    face.on_battery_change(BatteryChargeState::new(30, false, false), &mut host);
    face.render(&mut screen).unwrap();
    let partial = screen.count(config::BATTERY_COLOR);

    face.on_battery_change(BatteryChargeState::new(100, false, false), &mut host);
    face.render(&mut screen).unwrap();
    let full = screen.count(config::BATTERY_COLOR);

    assert!(0 < partial);
    assert!(partial < full);
}

#[test]
fn reload_recreates_layers_without_alert() {
    let mut host = FakeHost::at(2024, 8, 7, 8, 0);
    host.connected = true;
    let mut face = Watchface::new();
    face.load(pinetime_screen(), &mut host);
    assert!(!face.layers().unwrap().bluetooth().is_hidden());

    face.unload();
    assert!(!face.is_loaded());
    let mut screen = Screen::new(240, 240);
    assert_eq!(face.render(&mut screen), Ok(false));

    // Lost the connection while the window was away
    host.connected = false;
    face.load(pinetime_screen(), &mut host);
    assert!(face.is_loaded());
    assert!(face.layers().unwrap().bluetooth().is_hidden());
    assert_eq!(host.pulses, 0);
}

#[test]
fn events_while_unloaded_update_state_only() {
    let mut host = FakeHost::at(2024, 8, 7, 8, 0);
    let mut face = Watchface::new();

    face.on_minute_tick(host.now, &mut host);
    face.on_connectivity_change(true, &mut host);
    assert_eq!(face.clock().time(), "08:00");
    assert_eq!(face.connected(), Some(true));
    assert!(face.layers().is_none());

    let mut screen = Screen::new(240, 240);
    assert_eq!(face.render(&mut screen), Ok(false));
    assert_eq!(screen.frames, 0);
}
