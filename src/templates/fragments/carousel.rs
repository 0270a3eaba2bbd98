// templates/fragments/carousel.rs
//
// Carousels render as self-contained fragments. Every control works as a
// plain link (`?plan=2`) and, with htmx, swaps the fragment in place. While
// the carousel has a pending auto-advance, the fragment requests its own
// successor after the delay; swapping the fragment out discards that timer.

use crate::carousel::{Carousel, DeferredAdvance};
use crate::domain::ImageRef;
use crate::templates::components::{chevron_left, chevron_right};
use crate::templates::listing_path;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKind {
    FloorPlans,
    Gallery,
}

impl CarouselKind {
    /// DOM id of the fragment root, also the link anchor.
    pub fn dom_id(self) -> &'static str {
        match self {
            CarouselKind::FloorPlans => "floor-plans",
            CarouselKind::Gallery => "gallery",
        }
    }

    /// Detail page query parameter holding this carousel's slide.
    pub fn page_param(self) -> &'static str {
        match self {
            CarouselKind::FloorPlans => "plan",
            CarouselKind::Gallery => "photos",
        }
    }

    fn fragment_segment(self) -> &'static str {
        match self {
            CarouselKind::FloorPlans => "plans",
            CarouselKind::Gallery => "gallery",
        }
    }

    pub fn fragment_url(self, listing_id: &str, slide: usize) -> String {
        format!(
            "{}/{}?slide={slide}",
            listing_path(listing_id),
            self.fragment_segment()
        )
    }

    pub fn page_url(self, listing_id: &str, slide: usize) -> String {
        format!(
            "{}?{}={slide}#{}",
            listing_path(listing_id),
            self.page_param(),
            self.dom_id()
        )
    }
}

const ARROW_CLASS: &str = "w-5 h-5 text-gray-700";

pub type FloorPlanCarousel = Carousel<ImageRef, DeferredAdvance>;
pub type GalleryCarousel = Carousel<Vec<ImageRef>, DeferredAdvance>;

/// One floor plan per slide.
pub fn floor_plan_carousel(listing_id: &str, title: &str, carousel: &FloorPlanCarousel) -> Markup {
    let slide = html! {
        @if let Some(src) = carousel.current() {
            img src=(src)
                alt={ (title) " - planta " (carousel.active() + 1) }
                class="w-full h-auto max-h-[600px] object-contain rounded-xl";
        }
    };

    frame(CarouselKind::FloorPlans, listing_id, carousel, slide)
}

/// A page of photos per slide.
pub fn gallery_carousel(listing_id: &str, title: &str, carousel: &GalleryCarousel) -> Markup {
    let offset: usize = carousel.items()[..carousel.active()]
        .iter()
        .map(Vec::len)
        .sum();
    let slide = html! {
        @if let Some(photos) = carousel.current() {
            div class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                @for (i, src) in photos.iter().enumerate() {
                    a href=(src) target="_blank" rel="noopener noreferrer" {
                        img src=(src)
                            alt={ (title) " - foto " (offset + i + 1) }
                            class="w-full h-64 object-cover rounded-lg";
                    }
                }
            }
        }
    };

    frame(CarouselKind::Gallery, listing_id, carousel, slide)
}

fn frame<T>(
    kind: CarouselKind,
    listing_id: &str,
    carousel: &Carousel<T, DeferredAdvance>,
    slide: Markup,
) -> Markup {
    let target = format!("#{}", kind.dom_id());
    let active = carousel.active();
    let auto_url = carousel
        .pending()
        .map(|_| kind.fragment_url(listing_id, carousel.next_index()));
    let auto_trigger = carousel.pending().map(|t| t.hx_trigger());

    html! {
        div id=(kind.dom_id())
            class="carousel relative w-full"
            data-active=(active)
            hx-get=[auto_url]
            hx-trigger=[auto_trigger]
            hx-swap="outerHTML"
        {
            ol class="carousel-indicators flex justify-center gap-2 mb-4" {
                @for i in 0..carousel.len() {
                    li {
                        a href=(kind.page_url(listing_id, i))
                            hx-get=(kind.fragment_url(listing_id, i))
                            hx-target=(target)
                            hx-swap="outerHTML"
                            class=(indicator_class(i == active))
                            aria-current=[(i == active).then_some("true")]
                            aria-label={ "Slide " (i + 1) } {}
                    }
                }
            }

            div class="carousel-slide relative w-full overflow-hidden rounded-xl bg-gray-50 flex justify-center px-8 md:px-12" {
                (slide)
            }

            @if carousel.len() > 1 {
                a href=(kind.page_url(listing_id, carousel.previous_index()))
                    hx-get=(kind.fragment_url(listing_id, carousel.previous_index()))
                    hx-target=(target)
                    hx-swap="outerHTML"
                    class="carousel-prev absolute left-2 top-1/2 -translate-y-1/2 w-10 h-10 bg-white/90 rounded-full shadow-md flex items-center justify-center"
                    aria-label="Slide anterior"
                {
                    (chevron_left(ARROW_CLASS))
                }
                a href=(kind.page_url(listing_id, carousel.next_index()))
                    hx-get=(kind.fragment_url(listing_id, carousel.next_index()))
                    hx-target=(target)
                    hx-swap="outerHTML"
                    class="carousel-next absolute right-2 top-1/2 -translate-y-1/2 w-10 h-10 bg-white/90 rounded-full shadow-md flex items-center justify-center"
                    aria-label="Próximo slide"
                {
                    (chevron_right(ARROW_CLASS))
                }
            }
        }
    }
}

fn indicator_class(active: bool) -> &'static str {
    if active {
        "indicator active block h-2.5 w-8 rounded-full bg-blue-600"
    } else {
        "indicator block h-2.5 w-2.5 rounded-full bg-gray-300 hover:bg-gray-400"
    }
}
