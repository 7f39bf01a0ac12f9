/// Externally selected tool mode. The tool menu lives outside this
/// crate; the active tool arrives with every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Pointer,
    Pencil,
    Rectangle,
    Circle,
    Line,
    Save,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pointer => "Pointer",
            Self::Pencil => "Pencil",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Line => "Line",
            Self::Save => "Save",
        }
    }

    /// Shape tools drag out a guide and commit it on release.
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Rectangle | Self::Circle | Self::Line)
    }
}
