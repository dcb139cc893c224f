/*++

Licensed under the Apache-2.0 license.

File Name:

    pool.rs

Abstract:

    File contains the parameter buffer pool holding authenticated data.

--*/

use cot_error::{CotError, CotResult};
use zeroize::Zeroize;

/// Fixed pool of parameter buffers
///
/// Each slot records the node that last published into it. A reader names
/// the node it expects to own the slot; a slot since reused by another node
/// is reported as stale instead of returning that node's data.
pub struct ParamPool<const SLOTS: usize, const CAP: usize> {
    bufs: [[u8; CAP]; SLOTS],
    lens: [usize; SLOTS],
    owners: [Option<usize>; SLOTS],
}

impl<const SLOTS: usize, const CAP: usize> Default for ParamPool<SLOTS, CAP> {
    fn default() -> Self {
        Self {
            bufs: [[0u8; CAP]; SLOTS],
            lens: [0; SLOTS],
            owners: [None; SLOTS],
        }
    }
}

impl<const SLOTS: usize, const CAP: usize> ParamPool<SLOTS, CAP> {
    /// Copy a parameter into a slot on behalf of `owner`
    ///
    /// The previous contents are wiped first. A value that does not fit is
    /// rejected, never truncated.
    pub fn publish(&mut self, slot: usize, owner: usize, value: &[u8]) -> CotResult<()> {
        self.release(slot)?;

        let buf = self
            .bufs
            .get_mut(slot)
            .ok_or(CotError::CONFIG_SLOT_OUT_OF_RANGE)?;
        buf.get_mut(..value.len())
            .ok_or(CotError::PARAM_TOO_LARGE)?
            .copy_from_slice(value);

        if let (Some(len), Some(slot_owner)) = (self.lens.get_mut(slot), self.owners.get_mut(slot))
        {
            *len = value.len();
            *slot_owner = Some(owner);
        }
        Ok(())
    }

    /// Read a slot published by `owner`
    pub fn get(&self, slot: usize, owner: usize) -> CotResult<&[u8]> {
        match self.owners.get(slot) {
            None => Err(CotError::CONFIG_SLOT_OUT_OF_RANGE),
            Some(None) => Err(CotError::PARAM_NOT_PUBLISHED),
            Some(Some(o)) if *o != owner => Err(CotError::PARAM_SLOT_STALE),
            Some(Some(_)) => {
                let len = self.lens.get(slot).copied().unwrap_or(0);
                self.bufs
                    .get(slot)
                    .and_then(|buf| buf.get(..len))
                    .ok_or(CotError::PARAM_NOT_PUBLISHED)
            }
        }
    }

    /// Owner of a slot, if any
    pub fn owner(&self, slot: usize) -> Option<usize> {
        self.owners.get(slot).copied().flatten()
    }

    /// Wipe a slot and drop its owner
    pub fn release(&mut self, slot: usize) -> CotResult<()> {
        let buf = self
            .bufs
            .get_mut(slot)
            .ok_or(CotError::CONFIG_SLOT_OUT_OF_RANGE)?;
        buf.zeroize();
        if let (Some(len), Some(owner)) = (self.lens.get_mut(slot), self.owners.get_mut(slot)) {
            *len = 0;
            *owner = None;
        }
        Ok(())
    }

    /// Wipe every slot published by `owner`
    pub fn release_owner(&mut self, owner: usize) {
        let slots = self
            .bufs
            .iter_mut()
            .zip(self.lens.iter_mut())
            .zip(self.owners.iter_mut());
        for ((buf, len), slot_owner) in slots {
            if *slot_owner == Some(owner) {
                buf.zeroize();
                *len = 0;
                *slot_owner = None;
            }
        }
    }

    /// Wipe the whole pool
    pub fn clear(&mut self) {
        self.bufs.zeroize();
        self.lens = [0; SLOTS];
        self.owners = [None; SLOTS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_get() {
        let mut pool = ParamPool::<2, 8>::default();
        pool.publish(0, 3, &[1, 2, 3]).unwrap();
        assert_eq!(pool.get(0, 3), Ok(&[1u8, 2, 3][..]));
        assert_eq!(pool.owner(0), Some(3));
        assert_eq!(pool.get(1, 3), Err(CotError::PARAM_NOT_PUBLISHED));
        assert_eq!(pool.get(2, 3), Err(CotError::CONFIG_SLOT_OUT_OF_RANGE));
    }

    #[test]
    fn test_too_large_fails_closed() {
        let mut pool = ParamPool::<1, 4>::default();
        pool.publish(0, 1, &[9; 4]).unwrap();
        assert_eq!(pool.publish(0, 1, &[7; 5]), Err(CotError::PARAM_TOO_LARGE));
        // Old contents are gone, nothing was truncated into the slot
        assert_eq!(pool.get(0, 1), Err(CotError::PARAM_NOT_PUBLISHED));
    }

    #[test]
    fn test_reuse_is_stale_for_previous_owner() {
        let mut pool = ParamPool::<1, 8>::default();
        pool.publish(0, 1, &[0xaa; 8]).unwrap();
        pool.publish(0, 2, &[0xbb; 2]).unwrap();
        assert_eq!(pool.get(0, 1), Err(CotError::PARAM_SLOT_STALE));
        assert_eq!(pool.get(0, 2), Ok(&[0xbbu8; 2][..]));
    }

    #[test]
    fn test_release() {
        let mut pool = ParamPool::<3, 8>::default();
        pool.publish(0, 1, &[1]).unwrap();
        pool.publish(1, 2, &[2]).unwrap();
        pool.publish(2, 1, &[3]).unwrap();
        pool.release_owner(1);
        assert_eq!(pool.owner(0), None);
        assert_eq!(pool.owner(1), Some(2));
        assert_eq!(pool.owner(2), None);
        assert_eq!(pool.get(0, 1), Err(CotError::PARAM_NOT_PUBLISHED));
        assert_eq!(pool.get(1, 2), Ok(&[2u8][..]));

        pool.clear();
        assert_eq!(pool.get(1, 2), Err(CotError::PARAM_NOT_PUBLISHED));
    }

    #[test]
    fn test_release_owner_wipes_contents() {
        let mut pool = ParamPool::<2, 4>::default();
        pool.publish(0, 5, &[0xaa; 4]).unwrap();
        pool.publish(1, 6, &[0xbb; 4]).unwrap();
        pool.release_owner(5);
        assert_eq!(pool.bufs[0], [0u8; 4]);
        assert_eq!(pool.lens[0], 0);
        assert_eq!(pool.bufs[1], [0xbb; 4]);

        // Unknown owner leaves the pool alone
        pool.release_owner(9);
        assert_eq!(pool.owner(1), Some(6));
    }
}
