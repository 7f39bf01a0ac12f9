use std::path::{Path, PathBuf};

use crate::buffer::PixelBuffer;
use crate::error::CanvasResult;
use crate::tool::Tool;

/// One-shot export trigger, polled once per processed input event.
///
/// While armed, the first observation of the save tool exports the
/// buffer and disarms the gate, so holding save selected across many
/// events writes exactly one file. Observing any other tool re-arms
/// the gate, which makes each contiguous save-selection streak export
/// once. A failed export leaves the gate armed so the next save
/// observation retries.
pub struct ExportGate {
    armed: bool,
    path: PathBuf,
}

impl ExportGate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            armed: true,
            path: path.into(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// React to the tool selected while the latest event was handled.
    /// Returns true when an export actually happened.
    pub fn observe_tool(&mut self, tool: Tool, buffer: &PixelBuffer) -> CanvasResult<bool> {
        if tool != Tool::Save {
            self.armed = true;
            return Ok(false);
        }
        if !self.armed {
            return Ok(false);
        }
        buffer.export_to(&self.path)?;
        self.armed = false;
        Ok(true)
    }
}
