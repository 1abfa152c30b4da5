use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

use crate::codecs::ChunkedCodec;
use crate::core::Alphabet;

/// Configuration for a single named alphabet preset loaded from TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct AlphabetConfig {
    /// The symbols comprising the alphabet, in digit order.
    pub chars: String,
    /// Optional padding character, emitted on encode and stripped on
    /// decode (e.g. "=" for RFC 4648 encodings).
    #[serde(default)]
    pub padding: Option<String>,
    /// Optional decode-only padding character, stripped on decode but
    /// never emitted. Used by conventionally unpadded encodings whose
    /// decoders still accept padding, like url-safe base64.
    #[serde(default)]
    pub decode_padding: Option<String>,
}

impl AlphabetConfig {
    /// Builds the chunked codec described by this preset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured symbols do not form a valid
    /// power-of-two alphabet.
    pub fn codec(&self) -> Result<ChunkedCodec, String> {
        let alphabet = Alphabet::from_symbols(&self.chars)?;
        let padding = self.padding.as_ref().and_then(|s| s.chars().next());
        let decode_padding = self.decode_padding.as_ref().and_then(|s| s.chars().next());
        Ok(match (padding, decode_padding) {
            (Some(pad), _) => ChunkedCodec::with_padding(alphabet, pad),
            (None, Some(pad)) => ChunkedCodec::with_decode_padding(alphabet, pad),
            (None, None) => ChunkedCodec::new(alphabet),
        })
    }
}

/// Collection of alphabet presets loaded from TOML files.
#[derive(Debug, Deserialize)]
pub struct AlphabetRegistry {
    /// Map of preset names to their configurations.
    pub alphabets: HashMap<String, AlphabetConfig>,
}

impl AlphabetRegistry {
    /// Parses preset configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in presets bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads presets from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads the built-in presets with user overrides from standard
    /// locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in presets (from the library)
    /// 2. `~/.config/bytevise/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching names.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut registry = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("bytevise").join("alphabets.toml");
            if user_path.exists() {
                match Self::load_from_file(&user_path) {
                    Ok(user) => registry.merge(user),
                    Err(e) => {
                        eprintln!("Warning: failed to load user config from {:?}: {}", user_path, e)
                    }
                }
            }
        }

        let local_path = std::path::Path::new("alphabets.toml");
        if local_path.exists() {
            match Self::load_from_file(local_path) {
                Ok(local) => registry.merge(local),
                Err(e) => {
                    eprintln!("Warning: failed to load local config from {:?}: {}", local_path, e)
                }
            }
        }

        Ok(registry)
    }

    /// Merges another registry into this one; `other` wins on name clashes.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
    }

    /// Looks up a preset by name, suggesting a close match on failure.
    pub fn get(&self, name: &str) -> Result<&AlphabetConfig, RegistryError> {
        self.alphabets.get(name).ok_or_else(|| {
            let available: Vec<String> = self.alphabets.keys().cloned().collect();
            RegistryError::new(name, find_closest_name(name, &available))
        })
    }

    /// Preset names in sorted order, for listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.alphabets.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

/// Error when a named alphabet preset is not found.
#[derive(Debug)]
pub struct RegistryError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl RegistryError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = crate::codecs::errors::should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m alphabet '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`bytevise --list`\x1b[0m to see all alphabets"
            )?;
        } else {
            write!(f, "      run `bytevise --list` to see all alphabets")?;
        }

        Ok(())
    }
}

impl std::error::Error for RegistryError {}

/// Calculate Levenshtein distance between two strings.
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching preset name for a typo suggestion.
fn find_closest_name(name: &str, available: &[String]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(name, candidate);

        // Only suggest for small typos
        let threshold = if name.len() < 5 { 2 } else { 3 };

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}
