mod augment;
mod fonts;
mod svg_page;
mod text_image;

#[doc(inline)]
pub use augment::{Augmentation, AugmentationKind, RandomAugmenter};
#[doc(inline)]
pub use fonts::{FontMetrics, find_font_files, load_fonts};
#[doc(inline)]
pub use svg_page::{SvgCanvas, SvgDrawOptions, SvgPageSink, text_image_to_svg};
#[doc(inline)]
pub use text_image::{StyledWord, TextImage, TextImageGenerator, TextLine, WordStyle};
