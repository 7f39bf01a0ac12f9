use egui::Color32;

/// Byte order of a packed 32-bit pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    /// Red in the most significant byte (big-endian hosts).
    Rgba,
    /// Red in the least significant byte (little-endian hosts).
    Abgr,
}

/// Pixel format descriptor, resolved once when a buffer is created and
/// fixed for the buffer's lifetime. Carried as runtime data so nothing
/// downstream needs to branch on the host byte order again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    order: ChannelOrder,
}

impl PixelFormat {
    /// The channel order matching the host byte order.
    pub fn native() -> Self {
        let order = if cfg!(target_endian = "big") {
            ChannelOrder::Rgba
        } else {
            ChannelOrder::Abgr
        };
        Self { order }
    }

    pub fn with_order(order: ChannelOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Pack a draw color into the buffer's native representation.
    /// Alpha is always fully opaque, so a packed pixel is never zero.
    pub fn pack(&self, color: Color32) -> u32 {
        let (r, g, b) = (color.r() as u32, color.g() as u32, color.b() as u32);
        match self.order {
            ChannelOrder::Rgba => (r << 24) | (g << 16) | (b << 8) | 0xFF,
            ChannelOrder::Abgr => 0xFF00_0000 | (b << 16) | (g << 8) | r,
        }
    }

    /// Inverse of `pack`. Alpha comes back fully opaque regardless of
    /// what the stored alpha byte says.
    pub fn unpack(&self, pixel: u32) -> Color32 {
        let (r, g, b) = match self.order {
            ChannelOrder::Rgba => (pixel >> 24, pixel >> 16, pixel >> 8),
            ChannelOrder::Abgr => (pixel, pixel >> 8, pixel >> 16),
        };
        Color32::from_rgb(low_byte(r), low_byte(g), low_byte(b))
    }
}

/// Split a packed `0xRRGGBB` value into a draw color.
pub fn color_from_rgb24(rgb: u32) -> Color32 {
    Color32::from_rgb(low_byte(rgb >> 16), low_byte(rgb >> 8), low_byte(rgb))
}

fn low_byte(word: u32) -> u8 {
    (word & 0xFF) as u8
}
