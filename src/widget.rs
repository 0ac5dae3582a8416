use crate::sprite::Sprite;

use iced::widget::{canvas, center, image, row, text};
use iced::{Center, Element, Length, Pixels};

pub fn logo<'a, Message: 'a>(size: f32) -> Element<'a, Message> {
    row![pokeball(size, false), text("Pokédex").size(size)]
        .spacing(size / 2.0)
        .align_y(Center)
        .into()
}

/// The picture of the current Pokémon.
pub enum Picture {
    None,
    Loading,
    Loaded(image::Handle),
    Errored,
}

impl Picture {
    pub fn loaded(sprite: Sprite) -> Self {
        Self::Loaded(image::Handle::from_rgba(
            sprite.width,
            sprite.height,
            sprite.rgba,
        ))
    }
}

pub fn picture<'a, Message: 'a>(picture: &Picture, size: f32) -> Element<'a, Message> {
    let content: Element<'a, Message> = match picture {
        Picture::Loaded(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Picture::Loading => pokeball(size / 3.0, true),
        Picture::None | Picture::Errored => pokeball(size / 3.0, false),
    };

    center(content).width(size).height(size).into()
}

pub fn pokeball<'a, Message: 'a>(
    size: impl Into<Pixels>,
    is_dimmed: bool,
) -> Element<'a, Message> {
    use iced::mouse;
    use iced::{Color, Point, Rectangle, Renderer, Size, Theme};

    struct Pokeball {
        is_dimmed: bool,
    }

    impl<Message> canvas::Program<Message> for Pokeball {
        type State = canvas::Cache;

        fn draw(
            &self,
            cache: &Self::State,
            renderer: &Renderer,
            theme: &Theme,
            bounds: Rectangle,
            _cursor: mouse::Cursor,
        ) -> Vec<canvas::Geometry> {
            let pokeball = cache.draw(renderer, bounds.size(), |frame| {
                const RADIUS: f32 = 100.0;
                const LINE: f32 = 20.0;

                let palette = theme.palette();
                let alpha = if self.is_dimmed { 0.3 } else { 1.0 };

                let shell = Color {
                    a: alpha,
                    ..palette.danger
                };
                let ink = Color {
                    a: alpha,
                    ..palette.text
                };

                let center = Point::new(RADIUS, RADIUS);
                let outer_circle = canvas::Path::circle(center, RADIUS);
                let lower_half =
                    Rectangle::new(Point::new(0.0, RADIUS), Size::new(2.0 * RADIUS, RADIUS));
                let band = Rectangle::new(
                    Point::new(0.0, RADIUS - LINE / 2.0),
                    Size::new(2.0 * RADIUS, LINE),
                );
                let button_ring = canvas::Path::circle(center, RADIUS / 3.0);
                let button = canvas::Path::circle(center, RADIUS / 5.0);

                let scale = (bounds.width - 0.5) / (2.0 * RADIUS);

                frame.scale(scale);

                frame.fill(&outer_circle, shell);
                frame.fill_rectangle(
                    lower_half.position(),
                    lower_half.size(),
                    palette.background,
                );
                frame.stroke(
                    &outer_circle,
                    canvas::Stroke::default().with_color(ink).with_width(LINE / 2.0),
                );
                frame.fill_rectangle(band.position(), band.size(), ink);
                frame.fill(&button_ring, ink);
                frame.fill(&button, palette.background);
            });

            vec![pokeball]
        }
    }

    let size = size.into();

    canvas(Pokeball { is_dimmed }).width(size).height(size).into()
}
