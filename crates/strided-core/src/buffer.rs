//! Borrowed and owned record buffers.
//!
//! [`Records`] and [`RecordsMut`] are views over caller-owned slices;
//! they may be longer than their layout requires and the trailing
//! elements are never touched. [`RecordBuf`] owns exactly
//! `count * dimension` elements.

use crate::error::LayoutError;
use crate::layout::RecordLayout;

fn check_len(layout: &RecordLayout, available: usize) -> Result<(), LayoutError> {
    if available < layout.len() {
        return Err(LayoutError::TooShort {
            required: layout.len(),
            available,
        });
    }
    Ok(())
}

/// Read-only view of `count` records stored record-major in a slice.
#[derive(Debug)]
pub struct Records<'a, T> {
    data: &'a [T],
    layout: RecordLayout,
}

impl<T> Clone for Records<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Records<'_, T> {}

impl<'a, T> Records<'a, T> {
    /// View the first `count * dimension` elements of `data` as records.
    pub fn new(data: &'a [T], count: usize, dimension: usize) -> Result<Self, LayoutError> {
        Self::with_layout(data, RecordLayout::new(count, dimension)?)
    }

    /// View `data` with an existing layout.
    pub fn with_layout(data: &'a [T], layout: RecordLayout) -> Result<Self, LayoutError> {
        check_len(&layout, data.len())?;
        Ok(Self {
            data: &data[..layout.len()],
            layout,
        })
    }

    /// The view's layout.
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.layout.count()
    }

    /// Elements per record.
    pub fn dimension(&self) -> usize {
        self.layout.dimension()
    }

    /// Record `index` as a slice of `dimension` elements.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[inline]
    pub fn record(&self, index: usize) -> &'a [T] {
        &self.data[self.layout.record_range(index)]
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + 'a {
        let view = *self;
        (0..view.count()).map(move |i| view.record(i))
    }

    /// The viewed elements as a flat slice (exactly `layout.len()` long).
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

/// Mutable view of `count` records stored record-major in a slice.
#[derive(Debug)]
pub struct RecordsMut<'a, T> {
    data: &'a mut [T],
    layout: RecordLayout,
}

impl<'a, T> RecordsMut<'a, T> {
    /// View the first `count * dimension` elements of `data` as records.
    pub fn new(data: &'a mut [T], count: usize, dimension: usize) -> Result<Self, LayoutError> {
        Self::with_layout(data, RecordLayout::new(count, dimension)?)
    }

    /// View `data` with an existing layout.
    pub fn with_layout(data: &'a mut [T], layout: RecordLayout) -> Result<Self, LayoutError> {
        check_len(&layout, data.len())?;
        Ok(Self {
            data: &mut data[..layout.len()],
            layout,
        })
    }

    /// The view's layout.
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.layout.count()
    }

    /// Elements per record.
    pub fn dimension(&self) -> usize {
        self.layout.dimension()
    }

    /// Record `index` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[inline]
    pub fn record(&self, index: usize) -> &[T] {
        &self.data[self.layout.record_range(index)]
    }

    /// Record `index` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[inline]
    pub fn record_mut(&mut self, index: usize) -> &mut [T] {
        let range = self.layout.record_range(index);
        &mut self.data[range]
    }

    /// Reborrow as a read-only view.
    pub fn as_records(&self) -> Records<'_, T> {
        Records {
            data: &*self.data,
            layout: self.layout,
        }
    }

    /// The viewed elements as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    /// The viewed elements as a flat mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }
}

/// Owned buffer of exactly `count * dimension` elements.
///
/// The buffer is exclusively owned by its holder; views borrow from it
/// and its lifetime is independent of any buffer it was gathered or
/// duplicated from.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordBuf<T> {
    data: Vec<T>,
    layout: RecordLayout,
}

impl<T> RecordBuf<T> {
    /// Take ownership of `data` as `count` records of `dimension` elements.
    ///
    /// `data.len()` must equal `count * dimension` exactly.
    pub fn from_vec(data: Vec<T>, count: usize, dimension: usize) -> Result<Self, LayoutError> {
        let layout = RecordLayout::new(count, dimension)?;
        if data.len() != layout.len() {
            return Err(LayoutError::LengthMismatch {
                expected: layout.len(),
                actual: data.len(),
            });
        }
        Ok(Self { data, layout })
    }

    /// The buffer's layout.
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    /// Number of records.
    pub fn count(&self) -> usize {
        self.layout.count()
    }

    /// Elements per record.
    pub fn dimension(&self) -> usize {
        self.layout.dimension()
    }

    /// Record `index` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn record(&self, index: usize) -> &[T] {
        &self.data[self.layout.record_range(index)]
    }

    /// Record `index` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    pub fn record_mut(&mut self, index: usize) -> &mut [T] {
        let range = self.layout.record_range(index);
        &mut self.data[range]
    }

    /// Read-only view over every record.
    pub fn view(&self) -> Records<'_, T> {
        Records {
            data: &self.data,
            layout: self.layout,
        }
    }

    /// Mutable view over every record.
    pub fn view_mut(&mut self) -> RecordsMut<'_, T> {
        RecordsMut {
            data: &mut self.data,
            layout: self.layout,
        }
    }

    /// The elements as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a flat mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Release the flat element vector to the caller.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> RecordBuf<T> {
    /// Allocate `count` records with every element set to `value`.
    pub fn filled(count: usize, dimension: usize, value: T) -> Result<Self, LayoutError> {
        let layout = RecordLayout::new(count, dimension)?;
        Ok(Self {
            data: vec![value; layout.len()],
            layout,
        })
    }

    /// Copy the first `count * dimension` elements of `source` into a new
    /// owned buffer.
    pub fn copy_from_slice(
        source: &[T],
        count: usize,
        dimension: usize,
    ) -> Result<Self, LayoutError> {
        let view = Records::new(source, count, dimension)?;
        Ok(Self {
            data: view.as_slice().to_vec(),
            layout: view.layout(),
        })
    }

    /// An independent copy of this buffer.
    ///
    /// Named alias of [`Clone::clone`], paired with
    /// [`duplicate_records`](Self::duplicate_records).
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// An independent copy of the first `count` records.
    ///
    /// # Panics
    ///
    /// Panics if `count > self.count()`.
    pub fn duplicate_records(&self, count: usize) -> Self {
        assert!(
            count <= self.count(),
            "cannot duplicate {count} records from a buffer of {}",
            self.count()
        );
        let layout = self.layout.prefix(count);
        Self {
            data: self.data[..layout.len()].to_vec(),
            layout,
        }
    }
}
