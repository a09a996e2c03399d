use std::rc::Rc;

use yew::prelude::*;

/// Index into a fixed list of slides, wrapping at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Out-of-range targets are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Next => next.next(),
            CarouselAction::Prev => next.prev(),
            CarouselAction::GoTo(index) => next.go_to(index),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_forward_and_backward() {
        let mut slides = Carousel::new(3);
        slides.prev();
        assert_eq!(slides.current(), 2);
        slides.next();
        slides.next();
        assert_eq!(slides.current(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut slides = Carousel::new(4);
        slides.go_to(3);
        slides.go_to(9);
        assert_eq!(slides.current(), 3);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut slides = Carousel::new(0);
        slides.next();
        slides.prev();
        assert_eq!(slides.current(), 0);
    }
}
