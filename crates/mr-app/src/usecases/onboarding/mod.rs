//! Onboarding carousel flow.

use std::sync::Arc;

use mr_core::onboarding::{CarouselStep, OnboardingCarousel, OnboardingSlide};
use tracing::info;

use crate::usecases::session::{SessionBootstrapper, SessionError};

pub struct OnboardingFlow {
    carousel: OnboardingCarousel,
    session: Arc<SessionBootstrapper>,
}

impl OnboardingFlow {
    pub fn new(session: Arc<SessionBootstrapper>) -> Self {
        Self {
            carousel: OnboardingCarousel::new(),
            session,
        }
    }

    pub fn index(&self) -> usize {
        self.carousel.index()
    }

    pub fn current_slide(&self) -> &'static OnboardingSlide {
        self.carousel.current_slide()
    }

    pub fn is_last(&self) -> bool {
        self.carousel.is_last()
    }

    /// Advances one slide. "Next" on the last slide completes onboarding.
    pub async fn next(&mut self) -> Result<CarouselStep, SessionError> {
        let step = self.carousel.next();
        self.finish_if_done(step).await
    }

    pub async fn skip(&mut self) -> Result<CarouselStep, SessionError> {
        let step = self.carousel.skip();
        info!(at_slide = self.carousel.index(), "onboarding skipped");
        self.finish_if_done(step).await
    }

    async fn finish_if_done(&self, step: CarouselStep) -> Result<CarouselStep, SessionError> {
        if step == CarouselStep::Finished {
            self.session.complete_onboarding().await?;
        }
        Ok(step)
    }
}
