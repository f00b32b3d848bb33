use notelist_core::{
    display_note_list, MemoryPage, Note, NoteId, NoteListError, NoteWidget, Region, RenderError,
    RenderPort, SharedPort, ViewError, ADD_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
use std::cell::RefCell;
use std::rc::Rc;

fn page() -> (Rc<RefCell<MemoryPage>>, SharedPort) {
    let page = Rc::new(RefCell::new(MemoryPage::new()));
    let port: SharedPort = page.clone();
    (page, port)
}

#[test]
fn display_renders_form_and_empty_list() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();

    let page = page.borrow();
    assert!(page.form_rendered());
    assert!(page.shows_placeholder());
    assert!(page.rows().is_empty());
    assert_eq!(page.message(), None);
    assert!(widget.controller.is_empty());
    assert_eq!(widget.list_view.shown_rows(), 0);
}

#[test]
fn display_requires_every_region() {
    let page = Rc::new(RefCell::new(MemoryPage::with_regions([
        Region::List,
        Region::Form,
    ])));
    let port: SharedPort = page.clone();

    let err = display_note_list(port).err().unwrap();
    assert_eq!(err, ViewError::MissingRegion(Region::Message));
    assert!(!page.borrow().form_rendered());
}

#[test]
fn first_add_redraws_and_later_adds_append() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();

    widget.add_view.submit("Buy milk").unwrap();
    assert_eq!(page.borrow().full_redraws(), 2);
    assert_eq!(page.borrow().row_ids(), vec![1]);
    assert_eq!(page.borrow().message(), Some("Buy milk is added."));

    widget.add_view.submit("Call   mom\ntonight").unwrap();
    let page = page.borrow();
    assert_eq!(page.full_redraws(), 2);
    assert_eq!(page.row_ids(), vec![1, 2]);
    assert_eq!(page.rows()[1].text, "Call mom tonight");
    assert_eq!(widget.list_view.shown_rows(), 2);
}

#[test]
fn failed_add_only_updates_message() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();

    let err = widget.add_view.submit("").unwrap_err();
    assert!(matches!(err, NoteListError::Validation(_)));

    let page = page.borrow();
    assert!(page.shows_placeholder());
    assert_eq!(page.full_redraws(), 1);
    assert_eq!(page.message(), Some(ADD_FAILED_MESSAGE));
}

#[test]
fn remove_patches_row_until_list_empties() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();
    widget.add_view.submit("a").unwrap();
    widget.add_view.submit("b").unwrap();
    let redraws = page.borrow().full_redraws();

    widget.list_view.remove_clicked(1).unwrap();
    assert_eq!(page.borrow().row_ids(), vec![2]);
    assert_eq!(page.borrow().full_redraws(), redraws);
    assert_eq!(page.borrow().message(), Some("a is removed."));

    widget.list_view.remove_clicked(2).unwrap();
    assert!(page.borrow().shows_placeholder());
    assert_eq!(page.borrow().full_redraws(), redraws + 1);
    assert_eq!(widget.list_view.shown_rows(), 0);
}

#[test]
fn unknown_remove_reports_not_found() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();
    widget.add_view.submit("a").unwrap();

    let err = widget.list_view.remove_clicked(7).unwrap_err();
    assert_eq!(err, NoteListError::NotFound(Some(7)));
    assert_eq!(page.borrow().row_ids(), vec![1]);
    assert_eq!(page.borrow().message(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn broken_list_region_does_not_hide_status() {
    let (page, port) = page();
    let widget = display_note_list(port).unwrap();
    page.borrow_mut().remove_region(Region::List);

    widget.add_view.submit("still saved").unwrap();
    assert_eq!(widget.controller.len(), 1);
    assert_eq!(page.borrow().message(), Some("still saved is added."));
    assert!(page.borrow().rows().is_empty());
}

#[test]
fn view_error_maps_render_failures() {
    let missing: ViewError = RenderError::MissingRegion(Region::Form).into();
    assert_eq!(missing, ViewError::MissingRegion(Region::Form));
    let row: ViewError = RenderError::MissingRow(3).into();
    assert_eq!(row, ViewError::Render(RenderError::MissingRow(3)));
}

/// Page whose next row patch fails once, then behaves like `MemoryPage`.
#[derive(Default)]
struct FlakyPage {
    inner: MemoryPage,
    fail_next_append: bool,
    fail_next_remove: bool,
}

impl FlakyPage {
    fn new() -> Self {
        Self {
            inner: MemoryPage::new(),
            ..Self::default()
        }
    }
}

impl RenderPort for FlakyPage {
    fn has_region(&self, region: Region) -> bool {
        self.inner.has_region(region)
    }

    fn render_list(&mut self, notes: &[Note]) -> Result<(), RenderError> {
        self.inner.render_list(notes)
    }

    fn append_row(&mut self, note: &Note) -> Result<(), RenderError> {
        if std::mem::take(&mut self.fail_next_append) {
            return Err(RenderError::Io("append interrupted".to_string()));
        }
        self.inner.append_row(note)
    }

    fn remove_row(&mut self, id: NoteId) -> Result<(), RenderError> {
        if std::mem::take(&mut self.fail_next_remove) {
            return Err(RenderError::Io("remove interrupted".to_string()));
        }
        self.inner.remove_row(id)
    }

    fn render_message(&mut self, message: &str) -> Result<(), RenderError> {
        self.inner.render_message(message)
    }

    fn render_form(&mut self) -> Result<(), RenderError> {
        self.inner.render_form()
    }
}

fn flaky_widget() -> (Rc<RefCell<FlakyPage>>, NoteWidget) {
    let page = Rc::new(RefCell::new(FlakyPage::new()));
    let port: SharedPort = page.clone();
    let widget = display_note_list(port).unwrap();
    (page, widget)
}

fn assert_page_matches_list(page: &RefCell<FlakyPage>, widget: &NoteWidget) {
    let expected: Vec<NoteId> = widget
        .controller
        .snapshot()
        .iter()
        .filter_map(Note::id)
        .collect();
    let page = page.borrow();
    assert_eq!(page.inner.row_ids(), expected);
    assert_eq!(page.inner.shows_placeholder(), expected.is_empty());
}

#[test]
fn failed_append_is_repaired_by_next_event() {
    let (page, widget) = flaky_widget();
    widget.add_view.submit("a").unwrap();

    page.borrow_mut().fail_next_append = true;
    widget.add_view.submit("b").unwrap();
    assert_eq!(page.borrow().inner.row_ids(), vec![1]);
    assert!(widget.list_view.is_stale());
    assert_eq!(page.borrow().inner.message(), Some("b is added."));

    widget.list_view.remove_clicked(1).unwrap();
    assert!(!widget.list_view.is_stale());
    assert_eq!(widget.list_view.shown_rows(), 1);
    assert_page_matches_list(&page, &widget);

    widget.add_view.submit("c").unwrap();
    assert_page_matches_list(&page, &widget);
    widget.list_view.remove_clicked(2).unwrap();
    widget.list_view.remove_clicked(3).unwrap();
    assert_page_matches_list(&page, &widget);
}

#[test]
fn failed_remove_is_repaired_by_next_event() {
    let (page, widget) = flaky_widget();
    widget.add_view.submit("a").unwrap();
    widget.add_view.submit("b").unwrap();
    widget.add_view.submit("c").unwrap();

    page.borrow_mut().fail_next_remove = true;
    widget.list_view.remove_clicked(2).unwrap();
    assert_eq!(page.borrow().inner.row_ids(), vec![1, 2, 3]);

    widget.add_view.submit("d").unwrap();
    assert_page_matches_list(&page, &widget);
    assert_eq!(page.borrow().inner.row_ids(), vec![1, 3, 4]);

    widget.list_view.remove_clicked(4).unwrap();
    assert_page_matches_list(&page, &widget);
}
