/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// A key and the value stored with it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    #[must_use]
    pub fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    #[must_use]
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[must_use]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
