//! WASM application implementation
//!
//! Reads and writes the live document and exposes the handlers to the page
//! under their JavaScript names.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::app::FormBridge;
use crate::client::gloo::WasmClient;
use crate::config::BridgeConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::FormFields;

/// The page's own document.
pub struct DocumentForm {
    document: Document,
}

impl DocumentForm {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ErrorKind::DomError("no document available".to_string()))?;
        Ok(Self::new(document))
    }

    fn element(&self, id: &str) -> Result<web_sys::Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ErrorKind::MissingElement(id.to_string()).into())
    }
}

impl FormFields for DocumentForm {
    fn value(&self, id: &str) -> Result<String> {
        let element = self.element(id)?;
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Ok(input.value());
        }
        if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            return Ok(select.value());
        }
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return Ok(area.value());
        }
        Err(ErrorKind::DomError(format!("#{id} has no value")).into())
    }

    fn set_text(&self, id: &str, text: &str) -> Result<()> {
        let element = self.element(id)?;
        let element = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| ErrorKind::DomError(format!("#{id} is not an HTML element")))?;
        element.set_inner_text(text);
        Ok(())
    }
}

async fn page_bridge() -> Result<FormBridge<DocumentForm, WasmClient>> {
    FormBridge::connect(DocumentForm::current()?, BridgeConfig::same_origin()).await
}

fn to_js(e: crate::error::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen(js_name = checkTeacherAvailability)]
pub async fn check_teacher_availability() -> core::result::Result<(), JsValue> {
    let bridge = page_bridge().await.map_err(to_js)?;
    bridge.check_teacher_availability().await.map_err(to_js)?;
    Ok(())
}

#[wasm_bindgen(js_name = checkClassAvailability)]
pub async fn check_class_availability() -> core::result::Result<(), JsValue> {
    let bridge = page_bridge().await.map_err(to_js)?;
    bridge.check_class_availability().await.map_err(to_js)?;
    Ok(())
}

#[wasm_bindgen(js_name = scheduleClass)]
pub async fn schedule_class() -> core::result::Result<(), JsValue> {
    let bridge = page_bridge().await.map_err(to_js)?;
    bridge.schedule_class().await.map_err(to_js)?;
    Ok(())
}
