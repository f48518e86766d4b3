//! Minimal stand-in for the host's layout machinery: inflatable layouts
//! made of text views, looked up by identifier.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::error::StartupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u32);

/// Application resource identifiers.
#[allow(non_snake_case)]
pub mod R {
    pub mod layout {
        use crate::view::LayoutId;

        pub const ACTIVITY_MAIN: LayoutId = LayoutId(0x7f0b_001c);
    }

    pub mod id {
        use crate::view::ViewId;

        pub const SAMPLE_TEXT: ViewId = ViewId(0x7f08_0125);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextView {
    text: String,
}

impl TextView {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    id: LayoutId,
    views: BTreeMap<ViewId, TextView>,
}

impl Layout {
    pub fn new(id: LayoutId) -> Self {
        Self {
            id,
            views: BTreeMap::new(),
        }
    }

    pub fn with_text_view(mut self, view: ViewId) -> Self {
        self.views.insert(view, TextView::default());
        self
    }

    pub fn id(&self) -> LayoutId {
        self.id
    }
}

/// Layouts the window can inflate.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    layouts: HashMap<LayoutId, Layout>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resources shipped with the app: `activity_main` holding `sample_text`.
    pub fn app() -> Self {
        let mut res = Self::new();
        res.add_layout(Layout::new(R::layout::ACTIVITY_MAIN).with_text_view(R::id::SAMPLE_TEXT));
        res
    }

    pub fn add_layout(&mut self, layout: Layout) {
        self.layouts.insert(layout.id, layout);
    }

    fn inflate(&self, id: LayoutId) -> Result<Layout, StartupError> {
        self.layouts
            .get(&id)
            .cloned()
            .ok_or(StartupError::MissingLayout(id))
    }
}

#[derive(Debug, Default)]
pub struct Window {
    resources: Resources,
    content: Option<Layout>,
}

impl Window {
    pub fn new(resources: Resources) -> Self {
        Self {
            resources,
            content: None,
        }
    }

    /// Inflates `layout` and makes it the visible content, replacing any
    /// previous one.
    pub fn set_content_view(&mut self, layout: LayoutId) -> Result<(), StartupError> {
        let inflated = self.resources.inflate(layout)?;
        debug!("content view set to {:?}", layout);
        self.content = Some(inflated);
        Ok(())
    }

    pub fn content_view(&self) -> Option<&Layout> {
        self.content.as_ref()
    }

    pub fn find_view_by_id(&mut self, id: ViewId) -> Result<&mut TextView, StartupError> {
        let layout = self.content.as_mut().ok_or(StartupError::NoContentView)?;
        let layout_id = layout.id;
        layout
            .views
            .get_mut(&id)
            .ok_or(StartupError::MissingView(id, layout_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_layout_has_sample_text() {
        let mut window = Window::new(Resources::app());
        window.set_content_view(R::layout::ACTIVITY_MAIN).unwrap();
        let tv = window.find_view_by_id(R::id::SAMPLE_TEXT).unwrap();
        assert_eq!(tv.text(), "");
        tv.set_text("hi");
        assert_eq!(window.find_view_by_id(R::id::SAMPLE_TEXT).unwrap().text(), "hi");
    }

    #[test]
    fn lookup_before_content_view() {
        let mut window = Window::new(Resources::app());
        assert_eq!(
            window.find_view_by_id(R::id::SAMPLE_TEXT),
            Err(StartupError::NoContentView)
        );
    }

    #[test]
    fn unknown_layout() {
        let mut window = Window::new(Resources::new());
        assert_eq!(
            window.set_content_view(R::layout::ACTIVITY_MAIN),
            Err(StartupError::MissingLayout(R::layout::ACTIVITY_MAIN))
        );
        assert!(window.content_view().is_none());
    }

    #[test]
    fn unknown_view() {
        let mut window = Window::new(Resources::app());
        window.set_content_view(R::layout::ACTIVITY_MAIN).unwrap();
        assert_eq!(
            window.find_view_by_id(ViewId(1)),
            Err(StartupError::MissingView(ViewId(1), R::layout::ACTIVITY_MAIN))
        );
    }

    #[test]
    fn set_content_view_reinflates() {
        let mut window = Window::new(Resources::app());
        window.set_content_view(R::layout::ACTIVITY_MAIN).unwrap();
        window
            .find_view_by_id(R::id::SAMPLE_TEXT)
            .unwrap()
            .set_text("stale");
        window.set_content_view(R::layout::ACTIVITY_MAIN).unwrap();
        assert_eq!(window.find_view_by_id(R::id::SAMPLE_TEXT).unwrap().text(), "");
    }
}
