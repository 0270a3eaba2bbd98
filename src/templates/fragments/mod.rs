pub mod carousel;
pub mod contact_form;

pub use carousel::{
    floor_plan_carousel, gallery_carousel, CarouselKind, FloorPlanCarousel, GalleryCarousel,
};
pub use contact_form::{contact_modal, submit_button};
