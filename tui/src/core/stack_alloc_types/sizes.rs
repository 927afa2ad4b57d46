// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
///
/// A visible line rarely has more than a handful of highlighted runs, so styled runs and
/// token length tables live here.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
