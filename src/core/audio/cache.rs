//! core/audio/cache.rs
//! Effect -> loaded sound, filled on first use.
//!
//! Keys are `SoundEffect`, a closed enum, so the cache can never hold more
//! than `SoundEffect::ALL.len()` entries. Failed loads are not cached; the
//! next play retries.

use std::collections::HashMap;

use super::SoundEffect;

#[derive(Debug)]
pub struct SoundCache<S> {
    loaded: HashMap<SoundEffect, S>,
}

impl<S> Default for SoundCache<S> {
    fn default() -> Self {
        Self {
            loaded: HashMap::new(),
        }
    }
}

impl<S: Clone> SoundCache<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached sound, or runs `load` once and remembers the result.
    pub fn get_or_load<E>(
        &mut self,
        effect: SoundEffect,
        load: impl FnOnce(SoundEffect) -> Result<S, E>,
    ) -> Result<S, E> {
        if let Some(sound) = self.loaded.get(&effect) {
            return Ok(sound.clone());
        }

        let sound = load(effect)?;
        self.loaded.insert(effect, sound.clone());
        Ok(sound)
    }

    #[cfg(test)]
    pub fn contains(&self, effect: SoundEffect) -> bool {
        self.loaded.contains_key(&effect)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    #[cfg(test)]
    pub fn clear(&mut self) {
        self.loaded.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_each_effect_once() {
        let mut cache: SoundCache<String> = SoundCache::new();
        let mut loads = 0;

        for _ in 0..3 {
            let sound = cache
                .get_or_load(SoundEffect::Pop, |e| {
                    loads += 1;
                    Ok::<_, ()>(e.name().to_string())
                })
                .unwrap();
            assert_eq!(sound, "pop");
        }

        assert_eq!(loads, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut cache: SoundCache<String> = SoundCache::new();

        let first = cache.get_or_load(SoundEffect::Coin, |_| Err("missing"));
        assert!(first.is_err());
        assert!(!cache.contains(SoundEffect::Coin));

        let second = cache.get_or_load(SoundEffect::Coin, |_| Ok::<_, &str>("coin".into()));
        assert_eq!(second, Ok("coin".to_string()));
        assert!(cache.contains(SoundEffect::Coin));
    }

    #[test]
    fn size_is_bounded_by_catalogue() {
        let mut cache: SoundCache<u8> = SoundCache::new();
        for _ in 0..5 {
            for effect in SoundEffect::ALL {
                let _ = cache.get_or_load(effect, |_| Ok::<_, ()>(0));
            }
        }
        assert_eq!(cache.len(), SoundEffect::ALL.len());

        cache.clear();
        assert!(cache.is_empty());
    }
}
