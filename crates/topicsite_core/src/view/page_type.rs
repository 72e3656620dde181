//! Page-type capability shared by all view descriptors.

use crate::model::view_type::ViewVariant;

/// Names of the per-request view parameters every page accepts.
pub const VIEW_PARAM_NAMES: [&str; 2] = ["view_type", "display_options"];

/// Capability of a page kind to render in a closed set of variants.
pub trait PageTypeable {
    type Variant: ViewVariant;

    /// Variants this page kind can render.
    fn supported_variants(&self) -> &'static [Self::Variant];

    /// Variant used when the request does not pick one.
    fn default_variant(&self) -> Self::Variant;

    /// Names of `supported_variants`, in the same order.
    fn variant_names(&self) -> Vec<&'static str> {
        self.supported_variants()
            .iter()
            .map(|variant| variant.as_str())
            .collect()
    }

    /// Looks up a supported variant by name.
    fn parse_variant(&self, name: &str) -> Option<Self::Variant> {
        self.supported_variants()
            .iter()
            .copied()
            .find(|variant| variant.as_str() == name.trim())
    }
}
