use crate::modules::gallery::models::SliderSettings;

/// Behavior flags of the generic slider wrapper
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliderOptions {
    /// Scroll a full page of slides per step
    pub scroll_by_page: bool,
}

impl SliderOptions {
    /// Final settings for a slider holding `num_items` slides.
    ///
    /// With `scroll_by_page` a step scrolls `slides_to_show` slides. An unset
    /// `infinite` becomes true only when one step does not cover every slide.
    pub fn resolve(&self, settings: &SliderSettings, num_items: usize) -> SliderSettings {
        let mut resolved = settings.clone();

        if self.scroll_by_page {
            resolved.slides_to_scroll = resolved.slides_to_show;
        }

        if resolved.infinite.is_none() {
            resolved.infinite = Some(resolved.slides_to_scroll < num_items);
        }

        resolved
    }
}
