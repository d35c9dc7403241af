//! Media downloaders

use crate::domains::catalog::tool::Tool;

const CATEGORY: &str = "downloader";
const GRADIENT: &str = "from-cyan-500 to-sky-600";

pub fn downloader_tools() -> Vec<Tool> {
    vec![
        Tool::new("youtube-thumbnail-downloader", "YouTube Thumbnail Downloader", "Save video thumbnails in every resolution", CATEGORY, "M14.752 11.168l-3.197-2.132", 72_809, "from-red-500 to-rose-700"),
        Tool::new("instagram-photo-downloader", "Instagram Photo Downloader", "Download public Instagram photos", CATEGORY, "M3 9a2 2 0 012-2h.93", 66_350, "from-pink-500 to-purple-600"),
        Tool::new("twitter-video-downloader", "Twitter Video Downloader", "Save videos from public posts", CATEGORY, "M15 10l4.553-2.276", 40_477, GRADIENT),
        Tool::new("tiktok-video-downloader", "TikTok Video Downloader", "Download TikTok videos without a watermark", CATEGORY, "M9 19V6l12-3v13", 58_221, "from-gray-800 to-black"),
        Tool::new("facebook-video-downloader", "Facebook Video Downloader", "Download public Facebook videos", CATEGORY, "M18 2h-3a5 5 0 00-5 5v3", 29_906, "from-blue-600 to-indigo-700"),
    ]
}
