use crate::constants::{
    FACING_LABEL_ID, IMAGE_ID, READOUT_ID, SEGMENT_COLOR, SEGMENT_STROKE_WIDTH, STAGE_ID,
};
use crate::core::{view, AppState, LandmarkSet};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const SEGMENT_LAYER_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none";

/// DOM nodes of the landmark overlay: the captured image, its three drag
/// handles, the two segment lines and the angle readout.
pub struct Overlay {
    stage: web::Element,
    image: web::HtmlImageElement,
    handles: [web::HtmlElement; 3],
    segments: [web::Element; 2],
    readout: web::Element,
    facing_label: Option<web::Element>,
    shown_url: RefCell<Option<Rc<str>>>,
}

impl Overlay {
    /// Build handles and the segment layer inside the stage element.
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        let stage: web::Element = dom::element_by_id(document, STAGE_ID)?;
        let image: web::HtmlImageElement = dom::element_by_id(document, IMAGE_ID)?;
        let readout: web::Element = dom::element_by_id(document, READOUT_ID)?;
        let facing_label = document.get_element_by_id(FACING_LABEL_ID);
        image.set_draggable(false);

        let mut handles = Vec::with_capacity(LandmarkSet::LEN);
        for i in 0..LandmarkSet::LEN {
            let handle = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = handle.set_attribute("data-landmark", &i.to_string());
            _ = stage.append_child(&handle);
            handles.push(handle);
        }
        let handles: [web::HtmlElement; 3] = handles
            .try_into()
            .map_err(|_| anyhow::anyhow!("expected {} handles", LandmarkSet::LEN))?;

        let layer = document
            .create_element_ns(Some(SVG_NS), "svg")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = layer.set_attribute("style", SEGMENT_LAYER_STYLE);
        let line = || -> anyhow::Result<web::Element> {
            let el = document
                .create_element_ns(Some(SVG_NS), "line")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            _ = el.set_attribute("stroke", SEGMENT_COLOR);
            _ = el.set_attribute("stroke-width", &SEGMENT_STROKE_WIDTH.to_string());
            _ = layer.append_child(&el);
            Ok(el)
        };
        let segments = [line()?, line()?];
        _ = stage.append_child(&layer);

        Ok(Self {
            stage,
            image,
            handles,
            segments,
            readout,
            facing_label,
            shown_url: RefCell::new(None),
        })
    }

    pub fn image(&self) -> &web::HtmlImageElement {
        &self.image
    }

    pub fn handles(&self) -> &[web::HtmlElement; 3] {
        &self.handles
    }

    pub fn render(&self, state: &AppState) {
        match &state.image {
            Some(img) => {
                let mut shown = self.shown_url.borrow_mut();
                if shown.as_ref().map_or(true, |u| !Rc::ptr_eq(u, &img.url)) {
                    self.image.set_src(&img.url);
                    *shown = Some(img.url.clone());
                }
                dom::show(&self.stage);
            }
            None => dom::hide(&self.stage),
        }

        for (handle, point) in self.handles.iter().zip(state.landmarks.points()) {
            _ = handle.set_attribute("style", &view::handle_style(*point));
        }
        for (line, (from, to)) in self.segments.iter().zip(state.landmarks.segments()) {
            for (name, value) in view::segment_attributes(from, to) {
                _ = line.set_attribute(name, &value);
            }
        }

        self.readout
            .set_text_content(Some(&view::readout_text(state.angle())));
        if let Some(label) = &self.facing_label {
            label.set_text_content(Some(state.facing.label()));
        }
    }
}
