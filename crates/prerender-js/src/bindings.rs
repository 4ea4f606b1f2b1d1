//! DOM Bindings for JavaScript
//!
//! Native half of the emulated `document`. The functions here take and
//! return raw node ids; `prelude.js` wraps them into node objects and
//! installs `document`, `exports`, `module` and the `__prerender` hooks
//! used by the instantiation program.

use std::cell::RefCell;
use std::rc::Rc;

use prerender_dom::{Document, DomError, NodeId};
use rquickjs::{Ctx, Exception, Function, Object};

const PRELUDE: &str = include_str!("prelude.js");

/// State shared between the natives and the context owner
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    pub document: Document,
    /// Component name the program asked for but the bundle did not export
    pub unresolved: Option<String>,
}

impl RenderState {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            unresolved: None,
        }
    }
}

fn dom_error(ctx: &Ctx<'_>, err: DomError) -> rquickjs::Error {
    Exception::throw_type(ctx, &err.to_string())
}

fn node(raw: u32) -> NodeId {
    NodeId::from_raw(raw)
}

/// Install `document` and the render hooks into the global object
pub(crate) fn install_document(ctx: &Ctx<'_>, state: Rc<RefCell<RenderState>>) -> rquickjs::Result<()> {
    let native = Object::new(ctx.clone())?;

    let s = state.clone();
    native.set("createElement", Function::new(ctx.clone(), move |tag: String| -> u32 {
        s.borrow_mut().document.create_element(&tag).to_raw()
    })?)?;

    let s = state.clone();
    native.set("createTextNode", Function::new(ctx.clone(), move |text: String| -> u32 {
        s.borrow_mut().document.create_text_node(&text).to_raw()
    })?)?;

    let s = state.clone();
    native.set("createComment", Function::new(ctx.clone(), move |text: String| -> u32 {
        s.borrow_mut().document.create_comment(&text).to_raw()
    })?)?;

    let s = state.clone();
    native.set("createDocumentFragment", Function::new(ctx.clone(), move || -> u32 {
        s.borrow_mut().document.create_document_fragment().to_raw()
    })?)?;

    let s = state.clone();
    native.set("appendChild", Function::new(ctx.clone(), move |ctx: Ctx<'_>, parent: u32, child: u32| -> rquickjs::Result<()> {
        s.borrow_mut()
            .document
            .append_child(node(parent), node(child))
            .map_err(|e| dom_error(&ctx, e))
    })?)?;

    let s = state.clone();
    native.set("insertBefore", Function::new(ctx.clone(), move |ctx: Ctx<'_>, parent: u32, child: u32, reference: Option<u32>| -> rquickjs::Result<()> {
        s.borrow_mut()
            .document
            .insert_before(node(parent), node(child), reference.map(node))
            .map_err(|e| dom_error(&ctx, e))
    })?)?;

    let s = state.clone();
    native.set("setAttribute", Function::new(ctx.clone(), move |ctx: Ctx<'_>, id: u32, name: String, value: Option<String>| -> rquickjs::Result<()> {
        s.borrow_mut()
            .document
            .set_attribute(node(id), &name, value.as_deref())
            .map_err(|e| dom_error(&ctx, e))
    })?)?;

    let s = state.clone();
    native.set("parentNode", Function::new(ctx.clone(), move |id: u32| -> Option<u32> {
        s.borrow().document.tree().parent(node(id)).map(NodeId::to_raw)
    })?)?;

    let s = state.clone();
    native.set("textContent", Function::new(ctx.clone(), move |id: u32| -> String {
        s.borrow().document.tree().text_content(node(id))
    })?)?;

    let s = state.clone();
    native.set("appendStyle", Function::new(ctx.clone(), move |text: String| {
        s.borrow_mut().document.append_style_text(&text);
    })?)?;

    let s = state.clone();
    native.set("setStyleKey", Function::new(ctx.clone(), move |key: String| {
        s.borrow_mut().document.styles_mut().set_current_key(&key);
    })?)?;

    let s = state.clone();
    native.set("root", Function::new(ctx.clone(), move || -> u32 {
        s.borrow().document.root().to_raw()
    })?)?;

    let s = state.clone();
    native.set("target", Function::new(ctx.clone(), move |key: String| -> Option<u32> {
        s.borrow().document.target(&key).map(NodeId::to_raw)
    })?)?;

    let s = state;
    native.set("unresolved", Function::new(ctx.clone(), move |name: String| {
        tracing::debug!(component = %name, "unresolved component");
        s.borrow_mut().unresolved = Some(name);
    })?)?;

    let init: Function = ctx.eval(PRELUDE)?;
    init.call::<_, ()>((native, ctx.globals()))?;

    Ok(())
}
