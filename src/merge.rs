use crate::document::Document;

impl Document {
    /// Merge `overlay` on top of `self`.
    ///
    /// Sections present on both sides merge option by option; an overlay option
    /// replaces the base option wholesale, lists included. Everything else is
    /// unioned, with base order kept and new entries appended.
    pub fn merge(mut self, overlay: Document) -> Document {
        for (name, overlay_section) in overlay.into_sections() {
            let base = self.sections_mut().entry(name).or_default();
            for (key, values) in overlay_section.into_options() {
                base.options_mut().insert(key, values);
            }
        }
        self
    }
}
