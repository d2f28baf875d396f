//! Score and status text outside the canvas

use game_core::Notice;

/// Text currently shown in the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score_left: String,
    pub score_right: String,
    pub status: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score_left: "0".to_owned(),
            score_right: "0".to_owned(),
            status: String::new(),
        }
    }
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a notice; returns true if any text changed
    pub fn apply(&mut self, notice: &Notice) -> bool {
        let before = self.clone();
        match notice {
            Notice::StatusChanged(message) => self.status.clone_from(message),
            Notice::ScoreChanged { left, right } => {
                self.score_left = left.to_string();
                self.score_right = right.to_string();
            }
        }
        *self != before
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomHud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use game_core::Notice;
    use wasm_bindgen::JsValue;
    use web_sys::{Document, Element};

    use super::Hud;

    pub const SCORE_LEFT_ID: &str = "score-left";
    pub const SCORE_RIGHT_ID: &str = "score-right";
    pub const STATUS_ID: &str = "status";

    /// The page elements the HUD writes into
    pub struct DomHud {
        score_left: Element,
        score_right: Element,
        status: Element,
        hud: Hud,
    }

    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
    }

    impl DomHud {
        pub fn from_document(document: &Document) -> Result<Self, JsValue> {
            Ok(Self {
                score_left: element(document, SCORE_LEFT_ID)?,
                score_right: element(document, SCORE_RIGHT_ID)?,
                status: element(document, STATUS_ID)?,
                hud: Hud::new(),
            })
        }

        pub fn show(&mut self, notices: &[Notice]) {
            let mut changed = false;
            for notice in notices {
                changed |= self.hud.apply(notice);
            }
            if changed {
                self.score_left.set_text_content(Some(self.hud.score_left.as_str()));
                self.score_right.set_text_content(Some(self.hud.score_right.as_str()));
                self.status.set_text_content(Some(self.hud.status.as_str()));
            }
        }
    }
}
