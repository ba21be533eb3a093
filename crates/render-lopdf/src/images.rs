use carta_render_core::RenderError;
use carta_types::ImageData;
use lopdf::{Stream, dictionary};

/// A decoded raster ready to become an image XObject.
#[derive(Debug)]
pub(crate) struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl DecodedImage {
    /// Decodes PNG, JPEG or GIF bytes. Transparent pixels are composited
    /// over white, since the XObject carries no soft mask.
    pub fn decode(data: &ImageData) -> Result<Self, RenderError> {
        if data.is_empty() {
            return Err(RenderError::Image("empty image data".into()));
        }
        let rgba = image::load_from_memory(data.bytes())
            .map_err(|e| RenderError::Image(e.to_string()))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        for px in rgba.pixels() {
            let [r, g, b, a] = px.0;
            let alpha = u16::from(a);
            for c in [r, g, b] {
                let blended = (u16::from(c) * alpha + 255 * (255 - alpha)) / 255;
                rgb.push(blended as u8);
            }
        }
        Ok(Self { width, height, rgb })
    }

    pub fn into_xobject(self) -> Stream {
        Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(self.width),
                "Height" => i64::from(self.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            self.rgb,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(pixel: Rgba<u8>) -> ImageData {
        let img = RgbaImage::from_pixel(2, 3, pixel);
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        ImageData::new(bytes)
    }

    #[test]
    fn test_decodes_png_to_rgb() {
        let decoded = DecodedImage::decode(&png(Rgba([10, 20, 30, 255]))).unwrap();
        assert_eq!((decoded.width, decoded.height), (2, 3));
        assert_eq!(decoded.rgb.len(), 18);
        assert_eq!(&decoded.rgb[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_transparency_becomes_white() {
        let decoded = DecodedImage::decode(&png(Rgba([0, 0, 0, 0]))).unwrap();
        assert!(decoded.rgb.iter().all(|&c| c == 255));
    }

    #[test]
    fn test_garbage_is_an_image_error() {
        let err = DecodedImage::decode(&ImageData::new(vec![1u8, 2, 3])).unwrap_err();
        assert!(matches!(err, RenderError::Image(_)));
    }
}
