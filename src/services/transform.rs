// src/services/transform.rs
// DOCUMENTATION: Image store transformation directives
// PURPOSE: Render resize presets and derive size-specific delivery URLs

use std::fmt;

/// Path segment after which the image store accepts transformation directives
const UPLOAD_SEGMENT: &str = "/upload/";

/// One transformation step in the image store's directive syntax
/// DOCUMENTATION: Rendered as comma-separated `key_value` pairs,
/// e.g. `w_300,h_300,c_fill,g_auto,q_auto,f_auto`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformation {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub crop: Option<&'static str>,
    pub gravity: Option<&'static str>,
    pub quality: Option<&'static str>,
    pub fetch_format: Option<&'static str>,
    pub dpr: Option<&'static str>,
}

impl Transformation {
    /// Square center-crop with subject-aware gravity and automatic quality/format
    pub fn fill(size: u32) -> Self {
        Self {
            width: Some(size),
            height: Some(size),
            crop: Some("fill"),
            gravity: Some("auto"),
            quality: Some("auto"),
            fetch_format: Some("auto"),
            dpr: None,
        }
    }

    /// Automatic quality and format for the primary asset
    pub fn optimized() -> Self {
        Self {
            quality: Some("auto"),
            fetch_format: Some("auto"),
            ..Self::default()
        }
    }

    /// Responsive device-pixel-ratio adaptation
    pub fn responsive() -> Self {
        Self {
            dpr: Some("auto"),
            ..Self::default()
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if let Some(w) = self.width {
            parts.push(format!("w_{}", w));
        }
        if let Some(h) = self.height {
            parts.push(format!("h_{}", h));
        }
        if let Some(c) = self.crop {
            parts.push(format!("c_{}", c));
        }
        if let Some(g) = self.gravity {
            parts.push(format!("g_{}", g));
        }
        if let Some(q) = self.quality {
            parts.push(format!("q_{}", q));
        }
        if let Some(format) = self.fetch_format {
            parts.push(format!("f_{}", format));
        }
        if let Some(dpr) = self.dpr {
            parts.push(format!("dpr_{}", dpr));
        }

        write!(f, "{}", parts.join(","))
    }
}

/// Chain of steps applied to the primary asset on upload
/// DOCUMENTATION: Steps are joined with `/`
pub fn incoming_transformation() -> String {
    [Transformation::optimized(), Transformation::responsive()]
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("/")
}

/// Renditions the image store computes eagerly at upload time
/// DOCUMENTATION: Alternatives are joined with `|`
pub fn eager_transformations() -> String {
    [SizePreset::Grid, SizePreset::Large, SizePreset::Thumbnail]
        .iter()
        .map(|preset| preset.transformation().to_string())
        .collect::<Vec<_>>()
        .join("|")
}

/// Display sizes served to the gallery client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    Thumbnail,
    Grid,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [SizePreset::Thumbnail, SizePreset::Grid, SizePreset::Large];

    /// Edge length in pixels (all presets are square)
    pub fn edge_px(self) -> u32 {
        match self {
            SizePreset::Thumbnail => 300,
            SizePreset::Grid => 400,
            SizePreset::Large => 800,
        }
    }

    pub fn transformation(self) -> Transformation {
        Transformation::fill(self.edge_px())
    }
}

/// Derive a size-specific delivery URL from the canonical one
/// DOCUMENTATION: Inserts the preset's directive after the first `/upload/`.
/// URLs without that segment come back unchanged.
pub fn derive_url(canonical_url: &str, preset: SizePreset) -> String {
    match canonical_url.find(UPLOAD_SEGMENT) {
        Some(idx) => {
            let split = idx + UPLOAD_SEGMENT.len();
            format!(
                "{}{}/{}",
                &canonical_url[..split],
                preset.transformation(),
                &canonical_url[split..]
            )
        }
        None => {
            log::warn!(
                "Delivery URL has no '{}' segment, serving it untransformed: {}",
                UPLOAD_SEGMENT,
                canonical_url
            );
            canonical_url.to_string()
        }
    }
}
