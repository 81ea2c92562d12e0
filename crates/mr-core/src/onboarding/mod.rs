//! Onboarding carousel model.
//!
//! The carousel is shown until the resident either reaches the end or skips
//! it. Either way the onboarding flag is set and never cleared.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SLIDES: [OnboardingSlide; 5] = [
    OnboardingSlide {
        title: "Добро пожаловать",
        description: "Управляйте своим домом\nв одном приложении",
    },
    OnboardingSlide {
        title: "Что можно делать",
        description: "Всё необходимое для комфортной жизни",
    },
    OnboardingSlide {
        title: "Заявки в 1 клик",
        description: "Фото, описание —\nи мы уже работаем",
    },
    OnboardingSlide {
        title: "Умный помощник",
        description: "Поможем 24/7:\nподскажем, оформим заявку, напомним",
    },
    OnboardingSlide {
        title: "Безопасность",
        description: "Камеры, доступ и контроль\nвашего дома",
    },
];

/// Outcome of a carousel interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStep {
    /// Showing the slide at this index.
    Slide(usize),
    /// Carousel is done; onboarding must be marked complete.
    Finished,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingCarousel {
    index: usize,
    finished: bool,
}

impl OnboardingCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_slide(&self) -> &'static OnboardingSlide {
        &SLIDES[self.index]
    }

    pub fn is_last(&self) -> bool {
        self.index == SLIDES.len() - 1
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances one slide; on the last slide finishes the carousel.
    pub fn next(&mut self) -> CarouselStep {
        if self.finished || self.is_last() {
            self.finished = true;
            return CarouselStep::Finished;
        }
        self.index += 1;
        CarouselStep::Slide(self.index)
    }

    pub fn skip(&mut self) -> CarouselStep {
        self.finished = true;
        CarouselStep::Finished
    }
}
