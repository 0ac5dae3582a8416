use crate::pokebase::Client;

use bytes::Bytes;
use std::fmt;
use std::io;
use tokio::task;

#[derive(Clone)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Bytes,
}

impl Sprite {
    pub fn fetch<'a>(
        url: &str,
        client: &Client,
    ) -> impl Future<Output = Result<Sprite, anywho::Error>> + 'a {
        let url = url.to_owned();
        let client = client.clone();

        async move {
            let bytes = client.download_sprite(&url).await?;

            // Decode image as RGBA in a background blocking thread
            task::spawn_blocking(move || Self::decode(bytes)).await?
        }
    }

    pub fn decode(bytes: Bytes) -> Result<Self, anywho::Error> {
        let image = image::ImageReader::new(io::Cursor::new(bytes))
            .with_guessed_format()?
            .decode()?
            .to_rgba8();

        Ok(Sprite {
            width: image.width(),
            height: image.height(),
            rgba: Bytes::from(image.into_raw()),
        })
    }
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("rgba", &self.rgba.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_as_rgba() {
        let mut png = io::Cursor::new(Vec::new());

        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .write_to(&mut png, image::ImageFormat::Png)
            .expect("encode png");

        let sprite = Sprite::decode(Bytes::from(png.into_inner())).expect("decode png");

        assert_eq!((sprite.width, sprite.height), (4, 2));
        assert_eq!(sprite.rgba.len(), 4 * 2 * 4);
        assert_eq!(&sprite.rgba[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Sprite::decode(Bytes::from_static(b"<html>Not Found</html>")).is_err());
    }
}
