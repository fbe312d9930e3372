// SPDX-License-Identifier: MPL-2.0
//! Demo host for the player widget.
//!
//! Binds the wall-clock media element to a player, polls it on a timer,
//! and applies the reported events the way a real host would. Run with
//! `cargo run --example player`.

use iced::widget::{column, text};
use iced::{time, window, Element, Subscription, Task, Theme};
use iced_video::{ClockMedia, ControlsConfig, Event, Marker, Player, PlayerConfig, Volume};
use std::time::Instant;

fn main() -> iced::Result {
    iced::application(Demo::new, Demo::update, Demo::view)
        .title("iced_video demo")
        .theme(Demo::theme)
        .subscription(Demo::subscription)
        .run()
}

struct Demo {
    player: Player<ClockMedia>,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Player(iced_video::Message),
    Tick(Instant),
}

impl Demo {
    fn new() -> (Self, Task<Message>) {
        let config = PlayerConfig::new("https://example.com/clip.mp4")
            .with_controls(ControlsConfig::all())
            .with_volume(Volume::new(0.7))
            .with_markers(vec![
                Marker::new(1, 30.0).with_title("Intro"),
                Marker::new(2, 150.0).with_title("Chapter 1"),
                Marker::new(3, 420.0).with_title("Credits"),
            ]);

        let mut player = Player::new(config);
        player.bind(ClockMedia::new(600.0));

        (
            Self {
                player,
                status: String::from("Ready"),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let events = match message {
            Message::Player(message) => self.player.update(message),
            Message::Tick(_) => self.player.tick(),
        };

        let mut tasks = Vec::new();
        for event in events {
            tasks.push(self.apply(event));
        }
        Task::batch(tasks)
    }

    fn apply(&mut self, event: Event) -> Task<Message> {
        match event {
            Event::PlayRequested => {
                self.player.set_playing(true);
                self.status = String::from("Playing");
            }
            Event::PauseRequested => {
                self.player.set_playing(false);
                self.status = String::from("Paused");
            }
            Event::VolumeChanged(volume) => {
                self.player.set_volume(volume);
                self.status = format!("Volume {:.0}%", volume.percent());
            }
            Event::Progress { .. } | Event::DurationChanged(_) => {}
            Event::MarkerClicked(marker) => {
                self.status = format!("Marker: {}", marker.title);
            }
            Event::FullscreenChanged(fullscreen) => {
                self.status = if fullscreen {
                    String::from("Fullscreen")
                } else {
                    String::from("Windowed")
                };
                let mode = if fullscreen {
                    window::Mode::Fullscreen
                } else {
                    window::Mode::Windowed
                };
                return window::latest().and_then(move |id| window::set_mode(id, mode));
            }
            Event::DownloadRequested(url) => {
                self.status = format!("Download: {url}");
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            self.player.view().map(Message::Player),
            text(&self.status).size(14),
        ]
        .spacing(8)
        .padding(8)
        .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
