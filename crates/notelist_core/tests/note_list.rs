use notelist_core::{
    Listener, Note, NoteEvent, NoteEventKind, NoteList, NoteListError, ADD_FAILED_MESSAGE,
    NOT_FOUND_MESSAGE, REMOVED_NOTE_ID,
};
use std::cell::RefCell;
use std::rc::Rc;

fn capture(list: &mut NoteList) -> Rc<RefCell<Vec<NoteEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let listener = {
        let events = Rc::clone(&events);
        Listener::new(move |event: &NoteEvent| {
            events.borrow_mut().push(event.clone());
            Ok(())
        })
    };
    for kind in NoteEventKind::ALL {
        assert!(list.attach_observer(kind, listener.clone()));
    }
    events
}

#[test]
fn non_empty_adds_grow_list_with_increasing_ids() {
    let mut list = NoteList::new();
    let events = capture(&mut list);

    let mut previous = 0;
    for (idx, content) in ["a", "b b", " ", "line\nbreak"].into_iter().enumerate() {
        let id = list.add_note(&mut Note::new(content)).unwrap();
        assert!(id > previous);
        previous = id;
        assert_eq!(list.len(), idx + 1);

        let recorded = events.borrow();
        assert_eq!(recorded.len(), idx + 1);
        match recorded.last().unwrap() {
            NoteEvent::Added { note, message } => {
                assert_eq!(note.id(), Some(id));
                assert_eq!(note.content(), content);
                assert_eq!(message, &format!("{content} is added."));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}

#[test]
fn empty_add_keeps_list_and_still_notifies_once() {
    let mut list = NoteList::new();
    let events = capture(&mut list);

    let err = list.add_note(&mut Note::new("")).unwrap_err();
    assert!(matches!(err, NoteListError::Validation(_)));
    assert!(list.is_empty());

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].kind(), NoteEventKind::NoteAdd);
    assert!(!recorded[0].is_success());
    match &recorded[0] {
        NoteEvent::Added { note, message } => {
            assert_eq!(note.id(), None);
            assert_eq!(message, ADD_FAILED_MESSAGE);
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn removing_added_note_emits_original_id() {
    let mut list = NoteList::new();
    list.add_note(&mut Note::new("first")).unwrap();
    list.add_note(&mut Note::new("second")).unwrap();
    let events = capture(&mut list);

    let target = list.get(1).cloned().unwrap();
    assert_eq!(list.remove_note(&target), Ok(1));
    assert_eq!(list.len(), 1);
    assert_eq!(list.notes()[0].content(), "second");

    assert_eq!(
        *events.borrow(),
        vec![NoteEvent::Removed {
            id: 1,
            message: "first is removed.".to_string(),
        }]
    );
}

#[test]
fn removing_absent_or_already_removed_note_emits_sentinel() {
    let mut list = NoteList::new();
    list.add_note(&mut Note::new("only")).unwrap();
    let events = capture(&mut list);
    let target = list.get(1).cloned().unwrap();

    list.remove_note(&target).unwrap();
    let again = list.remove_note(&target).unwrap_err();
    assert_eq!(again, NoteListError::NotFound(Some(1)));
    let never = list.remove_note_by_id(42).unwrap_err();
    assert_eq!(never, NoteListError::NotFound(Some(42)));
    assert!(list.is_empty());

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 3);
    for event in &recorded[1..] {
        assert_eq!(
            event,
            &NoteEvent::Removed {
                id: REMOVED_NOTE_ID,
                message: NOT_FOUND_MESSAGE.to_string(),
            }
        );
    }
}

#[test]
fn same_listener_attached_twice_runs_once() {
    let mut list = NoteList::new();
    let calls = Rc::new(RefCell::new(0));
    let listener = {
        let calls = Rc::clone(&calls);
        Listener::new(move |_: &NoteEvent| {
            *calls.borrow_mut() += 1;
            Ok(())
        })
    };

    assert!(list.attach_observer(NoteEventKind::NoteAdd, listener.clone()));
    assert!(!list.attach_observer(NoteEventKind::NoteAdd, listener));
    list.add_note(&mut Note::new("x")).unwrap();
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn events_without_listeners_are_silent() {
    let mut list = NoteList::new();
    list.add_note(&mut Note::new("x")).unwrap();
    list.remove_note_by_id(1).unwrap();
    list.remove_note(&Note::new("draft")).unwrap_err();
    assert!(list.is_empty());
}

#[test]
fn buy_milk_scenario() {
    let mut list = NoteList::new();
    let events = capture(&mut list);

    let mut milk = Note::new("Buy milk");
    list.add_note(&mut milk).unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list.notes()[0].id(), Some(1));
    assert_eq!(list.notes()[0].content(), "Buy milk");

    list.add_note(&mut Note::new("")).unwrap_err();
    assert_eq!(list.len(), 1);

    list.remove_note(&milk).unwrap();
    assert!(list.is_empty());

    assert_eq!(
        events.borrow().last(),
        Some(&NoteEvent::Removed {
            id: 1,
            message: "Buy milk is removed.".to_string(),
        })
    );
}
