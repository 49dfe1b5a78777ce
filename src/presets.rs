//! Built-in preset catalogs for the creative-direction fields.
//!
//! These seed the `selected` half of a [`crate::timeline::field::CreativeField`];
//! custom text always wins over them at resolution time.

use crate::timeline::field::FieldKind;

pub const SYSTEM_ROLES: &[&str] = &[
    "Professional Storyboard Artist",
    "Cinematographer",
    "Concept Artist",
    "Movie Director",
    "Visual Prompt Engineer",
    "Anime Background Artist",
    "Lighting Technical Director",
    "Visual Effects Supervisor",
    "Screenwriter",
    "Animation Lead",
];

pub const VISUAL_MODIFIERS: &[&str] = &[
    "High contrast noir lighting",
    "Dramatic golden hour",
    "Soft focus background",
    "Extreme close-up detail",
    "Low-key mysterious mood",
    "Vibrant neon reflections",
    "Cinematic color grading",
    "Symmetrical composition",
    "Rule of thirds focus",
    "Volumetric god rays",
    "Handheld gritty style",
];

pub const SHOT_STYLES: &[&str] = &[
    "Cinematic Realism",
    "Cyberpunk",
    "Studio Ghibli Anime",
    "90s Retro Anime",
    "Vintage Film 35mm",
    "Modern Minimalist",
    "Chinese Ink Wash",
    "16-bit Pixel Art",
    "Hand-drawn Sketch",
    "Hyper-realistic 8K",
    "Oil Painting",
    "Noir Black & White",
    "Ukiyo-e Japanese",
    "Isometric 3D",
    "Steampunk",
    "Low Poly",
];

pub const CAMERA_MOVEMENTS: &[&str] = &[
    "Static Shot",
    "Slow Zoom In",
    "Slow Zoom Out",
    "Pan Left to Right",
    "Pan Right to Left",
    "Tilt Up",
    "Tilt Down",
    "Tracking Follow",
    "Handheld Shaky",
    "Dolly Zoom (Vertigo)",
    "360-degree Orbit",
    "Birds Eye View",
    "Dutch Angle",
    "Close-up Focus",
    "POV First Person",
    "Crane Shot",
];

pub const ATMOSPHERES: &[&str] = &[
    "Golden Hour Warmth",
    "Neon Night City",
    "Foggy Morning",
    "Rainy Melancholy",
    "Bright Midday Sun",
    "Deep Space Cold",
    "Forest Dappled Light",
    "Sunset Silhouette",
    "Stormy Electric",
    "Magical Blue Hour",
    "Firelight Glow",
    "Overcast Gloomy",
    "Sepia Nostalgic",
];

pub const AUDIO_ELEMENTS: &[&str] = &[
    "Lush Orchestral",
    "Lo-fi Beats",
    "Ambient Drone",
    "Cinematic Strings",
    "Smooth Jazz",
    "Epic Choir",
    "Sci-Fi Electronic",
    "Ethereal Vocals",
    "Minimalist Piano",
    "Tribal Percussion",
    "Synthwave Retro",
];

pub const SFX_EXAMPLES: &[&str] = &[
    "Heavy Footsteps",
    "Birds Chirping",
    "City Traffic",
    "Whoosh Transition",
    "Thunder Crack",
    "Electronic Glitch",
    "Paper Rustling",
    "Deep Heartbeat",
    "Distant Siren",
    "Rain hitting window",
];

pub const ACTION_EXAMPLES: &[&str] = &[
    "Walking slowly forward",
    "Looking into distance",
    "Smiling softly",
    "Running frantically",
    "Sitting in thought",
    "Dancing gracefully",
    "Whispering secrets",
    "Falling slowly",
    "Gazing at stars",
    "Walking in rain",
    "Driving at speed",
    "Waiting at station",
];

pub const BGM_EXAMPLES: &[&str] = &[
    "Dreamy Piano",
    "Soft Strings",
    "Acoustic Guitar",
    "Epic Orchestral",
    "Cyberpunk Synth",
    "Dark Ambient",
    "Sad Violin",
    "Jazz Saxophone",
    "Tension Drone",
    "Heroic Horns",
    "Romantic Harp",
];

pub const DIALOG_EXAMPLES: &[&str] = &[
    "\"I can't believe it's finally happening.\"",
    "\"Wait! Did you hear that?\"",
    "\"The city never sleeps, and neither do I.\"",
    "\"We're running out of time!\"",
    "\"Is this what you wanted?\"",
    "\"Hello? Is anyone there?\"",
    "\"It's a trap!\"",
];

pub const TEXT_STYLES: &[&str] = &[
    "Modern Sans",
    "Classic Serif",
    "Cinematic Bold",
    "Handwriting",
    "Glitch Style",
    "Neon Glow",
];

pub const FONT_SIZES: &[u32] = &[12, 18, 24, 36, 48, 72];

pub const TEXT_BG_OPTIONS: &[&str] = &[
    "none",
    "rgba(0,0,0,0.5)",
    "rgba(255,255,255,0.5)",
    "black",
    "white",
    "blur",
];

/// The preset catalog backing one creative field.
pub fn presets_for(kind: FieldKind) -> &'static [&'static str] {
    match kind {
        FieldKind::Action => ACTION_EXAMPLES,
        FieldKind::Camera => CAMERA_MOVEMENTS,
        FieldKind::Atmosphere => ATMOSPHERES,
        FieldKind::Audio => AUDIO_ELEMENTS,
        FieldKind::Bgm => BGM_EXAMPLES,
        FieldKind::Sfx => SFX_EXAMPLES,
        FieldKind::Dialog => DIALOG_EXAMPLES,
    }
}
