/// Interpolation modes with a known per-element cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Linear,
    Bilinear,
    Bicubic,
    Trilinear,
}

impl Interpolation {
    /// Parses a mode string as configured on upsampling layers.
    ///
    /// # Returns
    /// `None` for modes without a cost model.
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "nearest" => Some(Self::Nearest),
            "linear" => Some(Self::Linear),
            "bilinear" => Some(Self::Bilinear),
            "bicubic" => Some(Self::Bicubic),
            "trilinear" => Some(Self::Trilinear),
            _ => None,
        }
    }
}

/// Counts an upsampling as a mode-specific multiple of the output element
/// count. Nearest-neighbour upsampling is a pure copy and counts nothing.
pub fn upsample(mode: Interpolation, output_size: usize) -> f64 {
    let per_element: usize = match mode {
        Interpolation::Nearest => return 0.0,
        Interpolation::Linear => 5,
        Interpolation::Bilinear => 11,
        // Solving the 4x4 coefficient system, then evaluating the cubic.
        Interpolation::Bicubic => 224 + 35,
        Interpolation::Trilinear => 13 * 2 + 5,
    };

    (per_element * output_size) as f64
}
