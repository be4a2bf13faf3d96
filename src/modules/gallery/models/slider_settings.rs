use serde::{Deserialize, Serialize};

/// Overrides applied below a viewport width breakpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveSetting {
    pub breakpoint: u32,
    pub dots: bool,
    pub arrows: bool,
    pub slides_to_show: usize,
    pub vertical: bool,
    pub vertical_swiping: bool,
}

/// Settings handed to the carousel widget.
///
/// `infinite` and `slides_to_scroll` may be left unset; see
/// [`SliderOptions::resolve`](crate::modules::gallery::SliderOptions::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderSettings {
    /// Transition time in milliseconds
    pub speed: u32,
    pub infinite: Option<bool>,
    pub dots: bool,
    pub arrows: bool,
    pub slide_width: Option<u32>,
    pub slides_to_show: usize,
    pub slides_to_scroll: usize,
    pub vertical: bool,
    pub vertical_swiping: bool,
    #[serde(default)]
    pub responsive: Vec<ResponsiveSetting>,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            speed: 500,
            infinite: None,
            dots: false,
            arrows: true,
            slide_width: None,
            slides_to_show: 1,
            slides_to_scroll: 1,
            vertical: false,
            vertical_swiping: false,
            responsive: Vec::new(),
        }
    }
}
