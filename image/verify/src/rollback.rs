/*++

Licensed under the Apache-2.0 license.

File Name:

    rollback.rs

Abstract:

    File contains the anti-rollback gate in front of the non-volatile
    counters.

--*/

use crate::{cprintln, NvCounterStorage};
use cot_cfi::cfi_check_ge;
use cot_error::{CotError, CotResult};
use cot_image_types::ImageId;

/// Outcome of a successful rollback check
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RollbackDecision {
    /// The image is newer; raise the counter once the image is accepted
    Commit(u32),

    /// Nothing to persist
    NoCommit,
}

/// Anti-rollback gate
///
/// Counters only move forward. A counter that cannot be read fails the
/// check unless the platform exempts the image.
pub struct AntiRollbackGate<S> {
    storage: S,
}

impl<S> AntiRollbackGate<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Backing storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Compare a declared version against the stored counter
    ///
    /// # Arguments
    ///
    /// * `id`       - Image
    /// * `declared` - Version declared by the image
    /// * `exempt`   - Platform exempts the image from an unreadable counter
    ///
    /// # Returns
    ///
    /// * `RollbackDecision` - Whether the counter must be raised
    pub fn check<Id: ImageId>(
        &self,
        id: Id,
        declared: u32,
        exempt: bool,
    ) -> CotResult<RollbackDecision>
    where
        S: NvCounterStorage<Id>,
    {
        let (counter, known) = match self.storage.read(id) {
            Ok(counter) => (counter, true),
            Err(_) if exempt => {
                cprintln!("[cot] NV counter unreadable, image {} exempt", id.index());
                (0, false)
            }
            Err(_) => return Err(CotError::ROLLBACK_NV_READ_FAILURE),
        };

        if declared < counter {
            return Err(CotError::ROLLBACK_REJECTED);
        }
        cfi_check_ge(declared, counter)?;

        if known && declared > counter {
            Ok(RollbackDecision::Commit(declared))
        } else {
            Ok(RollbackDecision::NoCommit)
        }
    }

    /// Raise the counter of an image
    ///
    /// Decreasing commits fail and leave the counter unchanged; an equal
    /// value is a no-op.
    pub fn commit<Id: ImageId>(&mut self, id: Id, value: u32) -> CotResult<()>
    where
        S: NvCounterStorage<Id>,
    {
        let current = self
            .storage
            .read(id)
            .map_err(|_| CotError::ROLLBACK_NV_READ_FAILURE)?;
        if value < current {
            return Err(CotError::ROLLBACK_NV_DECREASE);
        }
        if value == current {
            return Ok(());
        }
        self.storage
            .write(id, value)
            .map_err(|_| CotError::ROLLBACK_NV_WRITE_FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    struct Img(usize);

    impl ImageId for Img {
        fn index(self) -> usize {
            self.0
        }
    }

    #[derive(Default)]
    struct Counters {
        values: [Option<u32>; 2],
        writes: usize,
        fail_writes: bool,
    }

    impl NvCounterStorage<Img> for Counters {
        fn read(&self, id: Img) -> CotResult<u32> {
            self.values[id.0].ok_or(CotError::ROLLBACK_NV_READ_FAILURE)
        }

        fn write(&mut self, id: Img, value: u32) -> CotResult<()> {
            if self.fail_writes {
                return Err(CotError::ROLLBACK_NV_WRITE_FAILURE);
            }
            self.writes += 1;
            self.values[id.0] = Some(value);
            Ok(())
        }
    }

    fn gate(counter: Option<u32>) -> AntiRollbackGate<Counters> {
        AntiRollbackGate::new(Counters {
            values: [counter, None],
            ..Default::default()
        })
    }

    #[test]
    fn test_check() {
        let gate = gate(Some(5));
        assert_eq!(gate.check(Img(0), 3, false), Err(CotError::ROLLBACK_REJECTED));
        assert_eq!(gate.check(Img(0), 5, false), Ok(RollbackDecision::NoCommit));
        assert_eq!(gate.check(Img(0), 6, false), Ok(RollbackDecision::Commit(6)));
    }

    #[test]
    fn test_unreadable_counter() {
        let gate = gate(None);
        assert_eq!(
            gate.check(Img(0), 100, false),
            Err(CotError::ROLLBACK_NV_READ_FAILURE)
        );
        assert_eq!(
            gate.check(Img(0), u32::MAX, false),
            Err(CotError::ROLLBACK_NV_READ_FAILURE)
        );
        assert_eq!(gate.check(Img(0), 0, true), Ok(RollbackDecision::NoCommit));
        assert_eq!(gate.check(Img(0), 100, true), Ok(RollbackDecision::NoCommit));
    }

    #[test]
    fn test_commit_is_monotonic() {
        let mut gate = gate(Some(0));
        gate.commit(Img(0), 7).unwrap();
        assert_eq!(
            gate.commit(Img(0), 6),
            Err(CotError::ROLLBACK_NV_DECREASE)
        );
        assert_eq!(gate.storage().values[0], Some(7));

        gate.commit(Img(0), 7).unwrap();
        assert_eq!(gate.storage().writes, 1);
        assert_eq!(gate.check(Img(0), 6, false), Err(CotError::ROLLBACK_REJECTED));
    }

    #[test]
    fn test_commit_failures() {
        let mut gate = gate(None);
        assert_eq!(
            gate.commit(Img(0), 1),
            Err(CotError::ROLLBACK_NV_READ_FAILURE)
        );

        let mut gate = AntiRollbackGate::new(Counters {
            values: [Some(1), None],
            fail_writes: true,
            ..Default::default()
        });
        assert_eq!(
            gate.commit(Img(0), 2),
            Err(CotError::ROLLBACK_NV_WRITE_FAILURE)
        );
        assert_eq!(gate.storage().values[0], Some(1));
    }
}
