use pokebase;

mod binding;
mod config;
mod sprite;
mod widget;

use crate::binding::{Channel, Event};
use crate::config::Config;
use crate::pokebase::{Client, Initialization, Navigator, Panel};
use crate::sprite::Sprite;
use crate::widget::{Picture, logo};

use function::Binary;
use iced::widget::{button, center, column, container, row, text};
use iced::{Center, Element, Fill, Font, Task, Theme};

const SPRITE_SIZE: f32 = 192.0;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    iced::application(Pokedex::new, Pokedex::update, Pokedex::view)
        .theme(Pokedex::theme)
        .default_font(Font::MONOSPACE)
        .window_size((420.0, 520.0))
        .run()
}

struct Pokedex {
    state: State,
}

enum State {
    Loading,
    Ready {
        navigator: Navigator<Client, Channel>,
        client: Client,
        status: Status,
        panel: Panel,
        picture: Picture,
        is_loading: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Starting,
    Browsing,
    Failed,
}

#[derive(Debug, Clone)]
enum Message {
    ConfigLoaded(Result<Config, anywho::Error>),
    Initialized(Result<Initialization, pokebase::Error>),
    Event(Event),
    Previous,
    Next,
    Reload,
    SpriteFetched(String, Result<Sprite, anywho::Error>),
}

impl Pokedex {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: State::Loading,
            },
            Task::perform(Config::load(), Message::ConfigLoaded),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(Ok(config)) => self.start(config),
            Message::ConfigLoaded(Err(error)) => {
                log::error!("{error}");

                self.start(Config::default())
            }
            Message::Initialized(result) => {
                let State::Ready { status, .. } = &mut self.state else {
                    return Task::none();
                };

                match result {
                    Ok(Initialization::Loaded { .. }) => *status = Status::Browsing,
                    Ok(Initialization::Dropped) => {}
                    Err(error) => {
                        log::error!("{error}");

                        *status = Status::Failed;
                    }
                }

                Task::none()
            }
            Message::Event(Event::Loading(loading)) => {
                if let State::Ready { is_loading, .. } = &mut self.state {
                    *is_loading = loading;
                }

                Task::none()
            }
            Message::Event(Event::Rendered(new_panel)) => {
                let State::Ready {
                    client,
                    panel,
                    picture,
                    ..
                } = &mut self.state
                else {
                    return Task::none();
                };

                let is_same_sprite = panel.sprite == new_panel.sprite;
                *panel = new_panel;

                if is_same_sprite && !matches!(picture, Picture::None) {
                    return Task::none();
                }

                if panel.sprite.is_empty() {
                    *picture = Picture::None;

                    return Task::none();
                }

                *picture = Picture::Loading;

                Task::perform(
                    Sprite::fetch(&panel.sprite, client),
                    Message::SpriteFetched.with(panel.sprite.clone()),
                )
            }
            Message::Previous => {
                let State::Ready { navigator, .. } = &self.state else {
                    return Task::none();
                };

                let navigator = navigator.clone();

                Task::future(async move { navigator.previous().await }).discard()
            }
            Message::Next => {
                let State::Ready { navigator, .. } = &self.state else {
                    return Task::none();
                };

                let navigator = navigator.clone();

                Task::future(async move { navigator.next().await }).discard()
            }
            Message::Reload => {
                let State::Ready { navigator, .. } = &self.state else {
                    return Task::none();
                };

                initialize(navigator)
            }
            Message::SpriteFetched(url, result) => {
                let State::Ready { panel, picture, .. } = &mut self.state else {
                    return Task::none();
                };

                if panel.sprite != url {
                    return Task::none();
                }

                *picture = match result {
                    Ok(sprite) => Picture::loaded(sprite),
                    Err(error) => {
                        log::error!("{error}");

                        Picture::Errored
                    }
                };

                Task::none()
            }
        }
    }

    fn start(&mut self, config: Config) -> Task<Message> {
        let client = Client::new(config.api);
        let (channel, events) = Channel::new();
        let navigator = Navigator::new(client.clone(), channel);

        let initialize = initialize(&navigator);

        self.state = State::Ready {
            navigator,
            client,
            status: Status::Starting,
            panel: Panel::default(),
            picture: Picture::None,
            is_loading: false,
        };

        Task::batch([Task::run(events, Message::Event), initialize])
    }

    fn view(&self) -> Element<Message> {
        let State::Ready {
            status,
            panel,
            picture,
            is_loading,
            ..
        } = &self.state
        else {
            return center(text("Loading...")).into();
        };

        let is_loading = *is_loading;
        let can_navigate = *status == Status::Browsing && !is_loading;

        let name = if *status == Status::Starting && panel.name.is_empty() {
            "Loading..."
        } else {
            panel.name.as_str()
        };

        let card = container(
            column![
                widget::picture(picture, SPRITE_SIZE),
                text(panel.number.as_str()).size(16),
                text(name).size(24),
            ]
            .spacing(10)
            .align_x(Center),
        )
        .padding(20)
        .width(Fill)
        .style(move |theme| {
            if is_loading {
                container::dark(theme)
            } else {
                container::bordered_box(theme)
            }
        });

        let controls = if *status == Status::Failed {
            row![
                button("Reload")
                    .padding([10, 20])
                    .on_press_maybe((!is_loading).then_some(Message::Reload))
            ]
        } else {
            row![
                button("Previous")
                    .padding([10, 20])
                    .on_press_maybe(can_navigate.then_some(Message::Previous)),
                button("Next")
                    .padding([10, 20])
                    .on_press_maybe(can_navigate.then_some(Message::Next)),
            ]
            .spacing(20)
        };

        center(
            column![logo(28.0), card, controls]
                .spacing(20)
                .align_x(Center)
                .max_width(360),
        )
        .padding(20)
        .into()
    }

    fn theme(&self) -> Theme {
        Theme::CatppuccinMocha
    }
}

fn initialize(navigator: &Navigator<Client, Channel>) -> Task<Message> {
    let navigator = navigator.clone();

    Task::perform(
        async move { navigator.initialize().await },
        Message::Initialized,
    )
}
