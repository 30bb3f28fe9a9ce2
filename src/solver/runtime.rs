//! Parallel-for adapter
//!
//! The sweep kernels all share one execution shape: split the flat density
//! buffer into consecutive disjoint chunks (a line, a plane or a whole
//! substrate volume) and run the same body on every chunk. This module is
//! the thin adapter between that shape and the thread pool.
//!
//! Scheduling uses static chunking: `work_items` consecutive outer
//! iterations form one unit of work. The value only affects how iterations
//! are grouped onto threads, never the arithmetic, so results are identical
//! for any setting. Without the `parallel` feature the loop runs serially
//! on the calling thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Run `body(index, chunk)` over consecutive `chunk_len` slices of `data`.
///
/// Chunks are disjoint, so bodies may write freely; the call returns only
/// once every chunk has been processed (fork/join).
pub(crate) fn for_each_chunk<R, F>(data: &mut [R], chunk_len: usize, work_items: usize, body: F)
where
    R: Send,
    F: Fn(usize, &mut [R]) + Send + Sync,
{
    debug_assert!(chunk_len > 0);
    debug_assert_eq!(data.len() % chunk_len, 0);

    #[cfg(feature = "parallel")]
    {
        data.par_chunks_mut(chunk_len)
            .with_min_len(work_items.max(1))
            .enumerate()
            .for_each(|(index, chunk)| body(index, chunk));
    }

    #[cfg(not(feature = "parallel"))]
    {
        let _ = work_items;
        for (index, chunk) in data.chunks_mut(chunk_len).enumerate() {
            body(index, chunk);
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
