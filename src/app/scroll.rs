use crate::modal::ScrollSurface;

/// Scrolling of the document body, toggled through its inline `overflow` style.
///
/// Does nothing while rendering on the server.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let res = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
    if let Err(e) = res {
        log::warn!("couldn't update body overflow: {e:?}");
    }
}

impl ScrollSurface for BodyScroll {
    fn suppress(&self) {
        #[cfg(feature = "hydrate")]
        set_body_overflow(Some("hidden"));
    }

    fn restore(&self) {
        #[cfg(feature = "hydrate")]
        set_body_overflow(None);
    }
}
