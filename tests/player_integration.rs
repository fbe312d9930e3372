// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the player orchestrator.
//!
//! These tests drive a [`Player`] against the wall-clock media element the
//! way a host application would: bind, poll with `tick`, feed control
//! messages through `update`, and apply the reported events back.

use iced_video::{ClockMedia, Event, Marker, MediaElement, Message, Player, PlayerConfig, Volume};
use std::thread;
use std::time::Duration;

const EPSILON: f64 = 1e-9;

fn config() -> PlayerConfig {
    PlayerConfig::new("https://example.com/clip.mp4")
}

fn bound_player(media: ClockMedia, config: PlayerConfig) -> Player<ClockMedia> {
    let mut player = Player::new(config);
    player.bind(media);
    player
}

#[test]
fn test_bind_applies_the_configuration() {
    let config = config()
        .with_volume(Volume::new(0.25))
        .with_looping(true)
        .with_time_start(2.0)
        .with_playing(true);
    let player = bound_player(ClockMedia::new(10.0), config);

    let media = player.media().expect("element should be bound");
    assert!((media.volume() - 0.25).abs() < EPSILON, "Volume should be applied");
    assert!(media.is_looping(), "Looping should be applied");
    assert!(media.is_playing(), "Playback should start");
    assert!(
        media.current_time() >= 2.0,
        "Playback should start at the configured offset"
    );
}

#[test]
fn test_playback_advances_and_reports_progress() {
    let mut player = bound_player(ClockMedia::new(60.0), config().with_playing(true));

    thread::sleep(Duration::from_millis(50));
    let events = player.tick();

    assert!(
        matches!(events.first(), Some(Event::DurationChanged(d)) if (*d - 60.0).abs() < EPSILON),
        "First tick should report the duration before any progress: {events:?}"
    );
    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::Progress { time, .. } if *time > 0.0)),
        "Playback should have advanced: {events:?}"
    );

    thread::sleep(Duration::from_millis(50));
    let events = player.tick();
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, Event::DurationChanged(_))),
        "An unchanged duration should not be reported again: {events:?}"
    );
    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::Progress { .. })),
        "Progress should keep flowing: {events:?}"
    );
}

#[test]
fn test_playback_pauses_at_the_end() {
    let mut player = bound_player(ClockMedia::new(0.05), config().with_playing(true));

    thread::sleep(Duration::from_millis(120));
    let events = player.tick();
    assert!(
        events.contains(&Event::PauseRequested),
        "Reaching the end should request a pause: {events:?}"
    );

    // The host reacts by pausing; the position is frozen at the end, so the
    // next poll has nothing to report.
    player.set_playing(false);
    let events = player.tick();
    assert!(events.is_empty(), "A paused element at the end should be quiet: {events:?}");
}

#[test]
fn test_scrub_seeks_the_element() {
    let mut player = bound_player(ClockMedia::new(100.0), config());

    // Learn the duration first; scrubbing needs it for the percentage math.
    player.tick();
    let events = player.update(Message::ScrubPressed {
        offset_x: 50.0,
        width: 200.0,
    });

    assert!(events.is_empty(), "Scrubbing reports through the next tick: {events:?}");
    let media = player.media().expect("element should be bound");
    assert!(
        (media.current_time() - 25.0).abs() < EPSILON,
        "A quarter-width click should seek to a quarter of the duration"
    );

    let events = player.tick();
    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::Progress { time, .. } if (*time - 25.0).abs() < EPSILON)),
        "The new position should be reported: {events:?}"
    );
}

#[test]
fn test_volume_click_round_trip() {
    let mut player = bound_player(ClockMedia::new(10.0), config());

    // A click 30 px from the top of a 120 px bar means 75% volume.
    let events = player.update(Message::VolumePressed {
        offset_y: 30.0,
        height: 120.0,
    });
    let volume = match events.as_slice() {
        [Event::VolumeChanged(volume)] => *volume,
        other => panic!("Expected a single volume event, got {other:?}"),
    };
    assert!((volume.value() - 0.75).abs() < EPSILON);

    player.set_volume(volume);
    let media = player.media().expect("element should be bound");
    assert!((media.volume() - 0.75).abs() < EPSILON, "Volume should round-trip");
    assert!(!media.is_muted(), "A volume click should unmute");
}

#[test]
fn test_mute_round_trip() {
    let mut player = bound_player(ClockMedia::new(10.0), config().with_volume(Volume::new(0.4)));

    let events = player.update(Message::MuteToggled);
    assert_eq!(
        events,
        vec![Event::VolumeChanged(Volume::new(0.0))],
        "Muting should zero the reported volume"
    );
    player.set_volume(Volume::new(0.0));
    {
        let media = player.media().expect("element should be bound");
        assert!(media.is_muted(), "The element should be muted");
        assert!(media.volume() < EPSILON, "The element volume should be zero");
    }
    assert!(player.state().muted, "Muting should survive the host echo");

    let events = player.update(Message::MuteToggled);
    assert_eq!(
        events,
        vec![Event::VolumeChanged(Volume::new(0.4))],
        "Unmuting should restore the premute volume"
    );
    player.set_volume(Volume::new(0.4));
    let media = player.media().expect("element should be bound");
    assert!(!media.is_muted(), "The element should be unmuted");
    assert!((media.volume() - 0.4).abs() < EPSILON);
}

#[test]
fn test_marker_click_seeks_and_reports() {
    let marker = Marker::new(7, 30.0).with_title("Chapter 2");
    let mut player = bound_player(
        ClockMedia::new(100.0),
        config().with_markers(vec![marker.clone()]),
    );

    player.tick();
    let events = player.update(Message::MarkerPressed(7));

    assert_eq!(events, vec![Event::MarkerClicked(marker)]);
    let media = player.media().expect("element should be bound");
    assert!((media.current_time() - 30.0).abs() < EPSILON);
}

#[test]
fn test_live_stream_reports_progress_without_duration() {
    let mut player = bound_player(ClockMedia::live(), config().with_playing(true));

    thread::sleep(Duration::from_millis(50));
    let events = player.tick();

    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::DurationChanged(d) if *d < EPSILON)),
        "An unbounded duration should normalize to zero: {events:?}"
    );
    assert!(
        events
            .iter()
            .any(|event| matches!(event, Event::Progress { time, .. } if *time > 0.0)),
        "Progress should flow even without a usable duration: {events:?}"
    );
    assert!(
        !events.contains(&Event::PauseRequested),
        "A live stream never finishes: {events:?}"
    );
}

#[test]
fn test_release_detaches_the_element() {
    let mut player = bound_player(ClockMedia::new(10.0), config().with_playing(true));

    let media = player.release().expect("element should be bound");
    assert!(media.is_playing(), "Release should not disturb the element");

    assert!(player.release().is_none(), "A second release has nothing to return");
    assert!(player.tick().is_empty(), "A released player should be quiet");
    assert!(
        player.update(Message::PlayPausePressed).is_empty(),
        "Messages after release should be ignored"
    );
}
