use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use super::dataset::{CategoryTag, Gallery, ImageRecord};
use super::keyboard::NavKey;
use super::lightbox::{LightboxState, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryAction<C> {
    SelectCategory(C),
    Activate(usize),
    Next,
    Previous,
    Dismiss,
}

impl<C> From<NavKey> for GalleryAction<C> {
    fn from(key: NavKey) -> Self {
        match key {
            NavKey::Escape => GalleryAction::Dismiss,
            NavKey::ArrowLeft => GalleryAction::Previous,
            NavKey::ArrowRight => GalleryAction::Next,
        }
    }
}

/// Filter and lightbox state over one gallery. The lightbox index always
/// points into the set visible under the current filter.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView<C: CategoryTag> {
    gallery: Gallery<C>,
    filter: C,
    lightbox: LightboxState,
}

impl<C: CategoryTag> GalleryView<C> {
    pub fn new(gallery: Gallery<C>) -> Self {
        Self {
            gallery,
            filter: C::ALL,
            lightbox: LightboxState::Closed,
        }
    }

    pub fn filter(&self) -> C {
        self.filter
    }

    pub fn lightbox(&self) -> LightboxState {
        self.lightbox
    }

    pub fn visible_images(&self) -> Vec<&ImageRecord<C>> {
        self.gallery.visible(self.filter).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.gallery.visible(self.filter).count()
    }

    /// Switches the filter. Always closes the lightbox, since an index into
    /// the old visible set means nothing under the new one.
    pub fn select_category(&mut self, tag: C) -> Transition {
        self.filter = tag;
        self.lightbox.dismiss()
    }

    pub fn activate(&mut self, index: usize) -> Transition {
        let len = self.visible_len();
        self.lightbox.activate(index, len)
    }

    pub fn next(&mut self) -> Transition {
        let len = self.visible_len();
        self.lightbox.next(len)
    }

    pub fn previous(&mut self) -> Transition {
        let len = self.visible_len();
        self.lightbox.previous(len)
    }

    pub fn dismiss(&mut self) -> Transition {
        self.lightbox.dismiss()
    }

    pub fn current_image(&self) -> Option<&ImageRecord<C>> {
        let index = self.lightbox.index()?;
        self.gallery.visible(self.filter).nth(index)
    }

    pub fn counter_label(&self) -> Option<String> {
        self.lightbox.counter_label(self.visible_len())
    }

    pub fn apply(&mut self, action: GalleryAction<C>) -> Transition {
        let transition = match action {
            GalleryAction::SelectCategory(tag) => self.select_category(tag),
            GalleryAction::Activate(index) => self.activate(index),
            GalleryAction::Next => self.next(),
            GalleryAction::Previous => self.previous(),
            GalleryAction::Dismiss => self.dismiss(),
        };
        debug!("{:?} -> {:?} ({:?})", action, self.lightbox, transition);
        transition
    }
}

impl<C: CategoryTag> Reducible for GalleryView<C> {
    type Action = GalleryAction<C>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::dataset::PortfolioCategory::{self, *};

    fn four_images() -> GalleryView<PortfolioCategory> {
        GalleryView::new(Gallery::new(vec![
            ImageRecord::new("/1.jpg", "one", &[Sports]),
            ImageRecord::new("/2.jpg", "two", &[Events]),
            ImageRecord::new("/3.jpg", "three", &[Sports, Portraits]),
            ImageRecord::new("/4.jpg", "four", &[Lifestyle]),
        ]))
    }

    fn sources(view: &GalleryView<PortfolioCategory>) -> Vec<&str> {
        view.visible_images().iter().map(|i| i.source.as_str()).collect()
    }

    fn assert_in_bounds(view: &GalleryView<PortfolioCategory>) {
        if let Some(i) = view.lightbox().index() {
            assert!(i < view.visible_len(), "index {} out of {}", i, view.visible_len());
        }
    }

    #[test]
    fn starts_on_all_and_closed() {
        let view = four_images();
        assert_eq!(view.filter(), All);
        assert_eq!(view.lightbox(), LightboxState::Closed);
        assert_eq!(view.visible_len(), 4);
    }

    #[test]
    fn sports_filter_keeps_first_and_third() {
        let mut view = four_images();
        view.select_category(Sports);
        assert_eq!(sources(&view), vec!["/1.jpg", "/3.jpg"]);
    }

    #[test]
    fn activate_then_next_wraps_around_two_images() {
        let mut view = four_images();
        view.select_category(Sports);
        assert_eq!(view.activate(1), Transition::Opened);
        assert_eq!(view.lightbox(), LightboxState::Open(1));
        assert_eq!(view.current_image().map(|i| i.source.as_str()), Some("/3.jpg"));
        assert_eq!(view.next(), Transition::Moved);
        assert_eq!(view.lightbox(), LightboxState::Open(0));
        assert_eq!(view.counter_label().as_deref(), Some("1 / 2"));
    }

    #[test]
    fn changing_filter_closes_and_recomputes() {
        let mut view = four_images();
        view.select_category(Sports);
        view.activate(1);
        view.next();
        assert_eq!(view.select_category(Events), Transition::Closed);
        assert_eq!(view.lightbox(), LightboxState::Closed);
        assert_eq!(sources(&view), vec!["/2.jpg"]);
    }

    #[test]
    fn reselecting_active_filter_still_closes() {
        let mut view = four_images();
        view.activate(3);
        assert_eq!(view.select_category(All), Transition::Closed);
        assert!(!view.lightbox().is_open());
        assert_eq!(view.select_category(All), Transition::Unchanged);
    }

    #[test]
    fn empty_filter_has_nothing_to_open() {
        let mut view = GalleryView::new(Gallery::new(vec![
            ImageRecord::new("/1.jpg", "one", &[Sports]),
            ImageRecord::new("/2.jpg", "two", &[Events]),
        ]));
        view.select_category(Lifestyle);
        assert_eq!(view.visible_len(), 0);
        assert!(view.visible_images().is_empty());
        assert_eq!(view.activate(0), Transition::Unchanged);
        assert_eq!(view.lightbox(), LightboxState::Closed);
        assert_eq!(view.current_image(), None);
    }

    #[test]
    fn single_visible_image_wraps_to_itself() {
        let mut view = four_images();
        view.select_category(Events);
        view.activate(0);
        view.next();
        assert_eq!(view.lightbox(), LightboxState::Open(0));
        view.previous();
        assert_eq!(view.lightbox(), LightboxState::Open(0));
    }

    #[test]
    fn escape_closes_and_reopening_works() {
        let mut view = four_images();
        view.activate(2);
        assert_eq!(view.apply(NavKey::Escape.into()), Transition::Closed);
        assert_eq!(view.lightbox(), LightboxState::Closed);
        assert_eq!(view.activate(0), Transition::Opened);
        assert_eq!(view.lightbox(), LightboxState::Open(0));
    }

    #[test]
    fn arrow_keys_navigate_like_buttons() {
        let mut keyed = four_images();
        let mut clicked = four_images();
        keyed.activate(0);
        clicked.activate(0);
        keyed.apply(NavKey::ArrowLeft.into());
        clicked.previous();
        assert_eq!(keyed.lightbox(), clicked.lightbox());
        assert_eq!(keyed.lightbox(), LightboxState::Open(3));
        keyed.apply(NavKey::ArrowRight.into());
        clicked.next();
        assert_eq!(keyed.lightbox(), LightboxState::Open(0));
        assert_eq!(keyed.lightbox(), clicked.lightbox());
    }

    #[test]
    fn index_stays_in_bounds_over_mixed_sequences() {
        let actions = [
            GalleryAction::Activate(3),
            GalleryAction::Next,
            GalleryAction::SelectCategory(Sports),
            GalleryAction::Next,
            GalleryAction::Activate(1),
            GalleryAction::Previous,
            GalleryAction::Previous,
            GalleryAction::Activate(9),
            GalleryAction::SelectCategory(Portraits),
            GalleryAction::Activate(0),
            GalleryAction::Next,
            GalleryAction::SelectCategory(Lifestyle),
            GalleryAction::Previous,
            GalleryAction::Activate(0),
            GalleryAction::Dismiss,
            GalleryAction::Next,
        ];
        let mut view = four_images();
        for action in actions {
            let was_open = view.lightbox().is_open();
            view.apply(action);
            assert_in_bounds(&view);
            if matches!(action, GalleryAction::SelectCategory(_)) {
                assert!(!view.lightbox().is_open(), "open after filter change (was_open={})", was_open);
            }
        }
    }

    #[test]
    fn reducer_keeps_identity_when_nothing_changes() {
        let view = Rc::new(four_images());
        let same = view.clone().reduce(GalleryAction::Next);
        assert!(Rc::ptr_eq(&view, &same));

        let opened = view.clone().reduce(GalleryAction::Activate(1));
        assert!(!Rc::ptr_eq(&view, &opened));
        assert_eq!(opened.lightbox(), LightboxState::Open(1));
    }
}
