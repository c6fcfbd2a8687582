//! Built-in host lists. Matching accepts the listed host or any subdomain.

/// Established news outlets.
pub const NEWS_DOMAINS: &[&str] = &[
    "apnews.com",
    "reuters.com",
    "bbc.com",
    "bbc.co.uk",
    "nytimes.com",
    "washingtonpost.com",
    "wsj.com",
    "theguardian.com",
    "ft.com",
    "bloomberg.com",
    "economist.com",
    "npr.org",
    "pbs.org",
    "cnn.com",
    "cbsnews.com",
    "nbcnews.com",
    "abcnews.go.com",
    "cnbc.com",
    "usatoday.com",
    "latimes.com",
    "politico.com",
    "axios.com",
    "propublica.org",
    "theatlantic.com",
    "aljazeera.com",
    "lemonde.fr",
    "spiegel.de",
    "afp.com",
];

/// Social platforms and user-generated content hosts.
pub const SOCIAL_DOMAINS: &[&str] = &[
    "twitter.com",
    "x.com",
    "facebook.com",
    "fb.com",
    "instagram.com",
    "threads.net",
    "tiktok.com",
    "youtube.com",
    "youtu.be",
    "reddit.com",
    "linkedin.com",
    "pinterest.com",
    "tumblr.com",
    "snapchat.com",
    "t.me",
    "telegram.org",
    "discord.com",
    "discord.gg",
    "truthsocial.com",
    "bsky.app",
    "mastodon.social",
    "4chan.org",
];

/// Host suffixes that mark an official government source.
pub const OFFICIAL_SUFFIXES: &[&str] = &[".gov"];

/// Evidence `type` values that never leave the investigator's workspace.
pub const INTERNAL_TYPES: &[&str] = &["note", "confidential", "internal", "internal_note"];
