//! Gallery images known at build time. The asset folder mixes JPEG and PNG
//! exports, so consumers get an explicit `Option` lookup instead of probing
//! for files at runtime.

pub const VENUE_PHOTOS: [&str; 6] = [
    "images/image_1.jpg",
    "images/image_2.jpg",
    "images/image_3.jpg",
    "images/image_4.jpg",
    "images/image_5.png",
    "images/image_6.jpg",
];

pub const CAFE_PHOTOS: [&str; 4] = [
    "images/sr_1.jpg",
    "images/sr_2.jpg",
    "images/sr_3.png",
    "images/sr_4.jpg",
];

pub fn venue_photo(index: usize) -> Option<&'static str> {
    VENUE_PHOTOS.get(index).copied()
}

pub fn cafe_photo(index: usize) -> Option<&'static str> {
    CAFE_PHOTOS.get(index).copied()
}
