//! Bird Logo
//!
//! Inline SVG mascot shown in the header. Wiggles on hover (CSS).

use leptos::prelude::*;

#[component]
pub fn BirdIcon(#[prop(default = 40)] size: u32) -> impl IntoView {
    view! {
        <svg
            class="bird-icon"
            width=size
            height=size
            viewBox="0 0 100 100"
            fill="none"
        >
            <rect width="100" height="100" rx="24" fill="hsl(258, 55%, 58%)" />

            // Body and head
            <ellipse cx="50" cy="55" rx="22" ry="20" fill="white" />
            <circle cx="50" cy="36" r="14" fill="white" />

            // Eyes
            <circle cx="44" cy="34" r="3" fill="hsl(222, 47%, 11%)" />
            <circle cx="45" cy="33" r="1" fill="white" />
            <circle cx="56" cy="34" r="3" fill="hsl(222, 47%, 11%)" />
            <circle cx="57" cy="33" r="1" fill="white" />

            <path d="M47 39 L50 44 L53 39" fill="hsl(30, 90%, 60%)" stroke-linejoin="round" />

            // Cheeks
            <circle cx="39" cy="39" r="4" fill="hsl(340, 60%, 85%)" opacity="0.7" />
            <circle cx="61" cy="39" r="4" fill="hsl(340, 60%, 85%)" opacity="0.7" />

            // Wings
            <ellipse cx="30" cy="55" rx="8" ry="12" fill="hsl(258, 55%, 75%)" transform="rotate(-15, 30, 55)" />
            <ellipse cx="70" cy="55" rx="8" ry="12" fill="hsl(258, 55%, 75%)" transform="rotate(15, 70, 55)" />

            // Feet
            <line x1="43" y1="73" x2="40" y2="80" stroke="hsl(30, 90%, 60%)" stroke-width="2.5" stroke-linecap="round" />
            <line x1="50" y1="74" x2="50" y2="81" stroke="hsl(30, 90%, 60%)" stroke-width="2.5" stroke-linecap="round" />
            <line x1="57" y1="73" x2="60" y2="80" stroke="hsl(30, 90%, 60%)" stroke-width="2.5" stroke-linecap="round" />

            // Heart
            <path
                d="M50 58 C50 56, 47 53, 45 55 C43 57, 45 60, 50 63 C55 60, 57 57, 55 55 C53 53, 50 56, 50 58Z"
                fill="hsl(340, 60%, 70%)"
            />
        </svg>
    }
}
