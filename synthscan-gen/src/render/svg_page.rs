use std::path::{Path, PathBuf};

use anyhow::Result;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{
    Definitions, Filter, FilterEffectColorMatrix, Group, Line, Rectangle, Text, Title,
};
use synthscan::entities::PageState;
use synthscan::geometry::BoundingBox;
use synthscan::packing::{Measured, PageSink};

use crate::io;
use crate::render::{Augmentation, TextImage, WordStyle};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    ///Fill of the page background
    #[serde(default = "default_page_fill")]
    pub page_fill: String,
    ///Draw the bounding box of every placed text image on top
    #[serde(default)]
    pub draw_bboxes: bool,
}

fn default_page_fill() -> String {
    "white".to_string()
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            page_fill: default_page_fill(),
            draw_bboxes: false,
        }
    }
}

/// Page under construction, one group per placed text image
pub struct SvgCanvas {
    pub page_index: usize,
    pub page_height: f32,
    pub path: PathBuf,
    images: Vec<(Group, BoundingBox)>,
}

/// Draws text images onto SVG pages and writes every finished page to `output_folder`.
pub struct SvgPageSink {
    pub output_folder: PathBuf,
    pub options: SvgDrawOptions,
}

impl SvgPageSink {
    pub fn new(output_folder: &Path, options: SvgDrawOptions) -> Self {
        Self {
            output_folder: output_folder.to_path_buf(),
            options,
        }
    }

    pub fn page_path(&self, page_index: usize) -> PathBuf {
        self.output_folder.join(format!("ocr_{page_index}.svg"))
    }
}

impl PageSink<TextImage> for SvgPageSink {
    type Canvas = SvgCanvas;

    fn open_page(&mut self, page: &PageState) -> Result<SvgCanvas> {
        Ok(SvgCanvas {
            page_index: page.page_index,
            page_height: page.page_height,
            path: self.page_path(page.page_index),
            images: vec![],
        })
    }

    fn place(
        &mut self,
        canvas: &mut SvgCanvas,
        image: &TextImage,
        x_centroid: f32,
        y_centroid: f32,
    ) -> Result<BoundingBox> {
        let bbox = BoundingBox::for_placement(image.size(), x_centroid, y_centroid);
        let id = canvas.images.len();
        //page coordinates have their origin in the bottom left, svg in the top left
        let group = text_image_to_svg(image, &format!("text_{id}"))
            .set(
                "transform",
                format!("translate({} {})", bbox.x0, canvas.page_height - bbox.y1),
            )
            .add(Title::new(format!(
                "text {id}, bbox: [x0: {:.1}, y0: {:.1}, x1: {:.1}, y1: {:.1}]",
                bbox.x0, bbox.y0, bbox.x1, bbox.y1
            )));
        canvas.images.push((group, bbox));
        Ok(bbox)
    }

    fn finalize(&mut self, canvas: SvgCanvas, page: &PageState) -> Result<PathBuf> {
        let (w, h) = (page.page_width, page.page_height);
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, w, h))
            .set("width", w)
            .set("height", h)
            .add(Title::new(format!(
                "page {}, {} text elements",
                page.page_index,
                page.n_placed()
            )))
            .add(
                Rectangle::new()
                    .set("width", w)
                    .set("height", h)
                    .set("fill", self.options.page_fill.as_str()),
            );

        let bboxes = canvas.images.iter().map(|(_, b)| *b).collect_vec();
        for (group, _) in canvas.images {
            document = document.add(group);
        }

        if self.options.draw_bboxes {
            let mut overlay = Group::new().set("id", "bboxes");
            for b in bboxes {
                overlay = overlay.add(
                    Rectangle::new()
                        .set("x", b.x0)
                        .set("y", h - b.y1)
                        .set("width", b.width())
                        .set("height", b.height())
                        .set("fill", "none")
                        .set("stroke", "red")
                        .set("stroke-width", 0.5),
                );
            }
            document = document.add(overlay);
        }

        io::write_svg(&document, &canvas.path)?;
        Ok(canvas.path)
    }
}

/// Draws a text image as a group spanning `[0, width] x [0, height]`, augmentations included.
pub fn text_image_to_svg(image: &TextImage, id: &str) -> Group {
    let size = image.size();
    let base = image.base_size;

    //svg applies the rightmost transform first, so the augmentations are listed last to first
    let transform = std::iter::once(format!("translate({} {})", size.width / 2.0, size.height / 2.0))
        .chain(image.augmentations.iter().rev().filter_map(|a| match a {
            Augmentation::Resize { sx, sy } => Some(format!("scale({sx} {sy})")),
            //counter-clockwise on the page is negative in the svg coordinate system
            Augmentation::Rotation { degrees } => Some(format!("rotate({})", -degrees)),
            Augmentation::ColorDegradation { .. } => None,
        }))
        .chain(std::iter::once(format!(
            "translate({} {})",
            -base.width / 2.0,
            -base.height / 2.0
        )))
        .join(" ");

    let mut content = Group::new()
        .set("transform", transform)
        .add(
            Rectangle::new()
                .set("width", base.width)
                .set("height", base.height)
                .set("fill", "white"),
        );

    let stroke_width = f32::max(1.0, (image.font_size / 15.0).floor());
    for line in &image.lines {
        let baseline = line.y + image.ascent;
        for word in &line.words {
            let weight = match word.style {
                WordStyle::Bold => "bold",
                _ => "normal",
            };
            content = content.add(
                Text::new(word.text.as_str())
                    .set("x", word.x)
                    .set("y", baseline)
                    .set("font-family", image.font_family.as_str())
                    .set("font-size", image.font_size)
                    .set("font-weight", weight)
                    .set("fill", "black"),
            );
            if word.style == WordStyle::Strikethrough {
                let strike_y = line.y + image.ascent * 0.6;
                content = content.add(
                    Line::new()
                        .set("x1", word.x)
                        .set("y1", strike_y)
                        .set("x2", word.x + word.width)
                        .set("y2", strike_y)
                        .set("stroke", "black")
                        .set("stroke-width", stroke_width),
                );
            }
        }
    }

    let mut group = Group::new().set("id", id);

    let saturation = image.saturation();
    if saturation < 1.0 {
        let filter_id = format!("{id}_desaturate");
        group = group.add(
            Definitions::new().add(
                Filter::new().set("id", filter_id.as_str()).add(
                    FilterEffectColorMatrix::new()
                        .set("type", "saturate")
                        .set("values", saturation),
                ),
            ),
        );
        content = content.set("filter", format!("url(#{filter_id})"));
    }

    group.add(content)
}
