use crate::api::ListingsApi;
use crate::carousel::{pages, Carousel, DeferredAdvance};
use crate::config::SiteConfig;
use crate::contact::ContactComposer;
use crate::domain::Listing;
use crate::templates::fragments::{FloorPlanCarousel, GalleryCarousel};

/// Everything a request handler needs. Built once at startup and shared
/// read-only by all workers.
pub struct App {
    pub api: ListingsApi,
    pub site: SiteConfig,
    pub composer: ContactComposer,
}

impl App {
    pub fn new(api: ListingsApi, site: SiteConfig) -> Self {
        let composer = ContactComposer::new(site.messaging_domain.clone());
        Self {
            api,
            site,
            composer,
        }
    }

    /// Floor-plan carousel positioned at `slide` when that slide exists.
    pub fn floor_plans(&self, listing: &Listing, slide: Option<usize>) -> Option<FloorPlanCarousel> {
        let mut carousel = Carousel::new(
            listing.floor_plans.clone(),
            DeferredAdvance,
            self.site.carousel_period,
        )?;
        if let Some(slide) = slide {
            carousel.go_to(slide);
        }
        Some(carousel)
    }

    /// Gallery carousel over pages of photos.
    pub fn gallery(&self, listing: &Listing, slide: Option<usize>) -> Option<GalleryCarousel> {
        let mut carousel = Carousel::new(
            pages(&listing.gallery, self.site.gallery_page_size),
            DeferredAdvance,
            self.site.carousel_period,
        )?;
        if let Some(slide) = slide {
            carousel.go_to(slide);
        }
        Some(carousel)
    }
}
