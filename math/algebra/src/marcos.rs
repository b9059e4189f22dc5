/// Implements component wise arithmetic, scalar arithmetic and the
/// [`crate::Vector`] construction ops for a plain vector struct.
macro_rules! impl_vector_ops {
  ($VectorN:ident { $($field:ident),+ }, $n:expr) => {
    impl<T> $VectorN<T> {
      #[inline]
      pub const fn new($($field: T),+) -> Self {
        Self { $($field),+ }
      }
    }

    impl<T: Scalar> Vector<T> for $VectorN<T> {
      #[inline]
      fn create<F>(f: F) -> Self
      where
        F: Fn() -> T,
      {
        Self { $($field: f()),+ }
      }

      #[inline]
      fn map<F>(self, f: F) -> Self
      where
        F: Fn(T) -> T,
      {
        Self { $($field: f(self.$field)),+ }
      }

      #[inline]
      fn zip<F>(self, v2: Self, f: F) -> Self
      where
        F: Fn(T, T) -> T,
      {
        Self { $($field: f(self.$field, v2.$field)),+ }
      }
    }

    impl<T: Scalar> RealVector<T> for $VectorN<T> {}
    impl<T: Scalar> VectorSpace<T> for $VectorN<T> {}
    impl<T: Scalar> InnerProductSpace<T> for $VectorN<T> {
      #[inline]
      fn dot_impl(&self, b: Self) -> T {
        T::zero() $(+ self.$field * b.$field)+
      }
    }

    impl<T: Scalar> Add for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn add(self, rhs: Self) -> Self {
        Self { $($field: self.$field + rhs.$field),+ }
      }
    }
    impl<T: Scalar> Sub for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn sub(self, rhs: Self) -> Self {
        Self { $($field: self.$field - rhs.$field),+ }
      }
    }
    impl<T: Scalar> Mul for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: Self) -> Self {
        Self { $($field: self.$field * rhs.$field),+ }
      }
    }
    impl<T: Scalar> Div for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn div(self, rhs: Self) -> Self {
        Self { $($field: self.$field / rhs.$field),+ }
      }
    }
    impl<T: Scalar> Mul<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn mul(self, rhs: T) -> Self {
        Self { $($field: self.$field * rhs),+ }
      }
    }
    impl<T: Scalar> Div<T> for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn div(self, rhs: T) -> Self {
        Self { $($field: self.$field / rhs),+ }
      }
    }
    impl<T: Scalar> Neg for $VectorN<T> {
      type Output = Self;
      #[inline]
      fn neg(self) -> Self {
        Self { $($field: -self.$field),+ }
      }
    }

    impl<T: Scalar> AddAssign for $VectorN<T> {
      #[inline]
      fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
      }
    }
    impl<T: Scalar> SubAssign for $VectorN<T> {
      #[inline]
      fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
      }
    }
    impl<T: Scalar> MulAssign for $VectorN<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
      }
    }
    impl<T: Scalar> MulAssign<T> for $VectorN<T> {
      #[inline]
      fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
      }
    }

    impl Mul<$VectorN<f32>> for f32 {
      type Output = $VectorN<f32>;
      #[inline]
      fn mul(self, rhs: $VectorN<f32>) -> $VectorN<f32> {
        rhs * self
      }
    }
    impl Mul<$VectorN<f64>> for f64 {
      type Output = $VectorN<f64>;
      #[inline]
      fn mul(self, rhs: $VectorN<f64>) -> $VectorN<f64> {
        rhs * self
      }
    }

    unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for $VectorN<T> {}
    unsafe impl<T: bytemuck::Pod> bytemuck::Pod for $VectorN<T> {}

    impl<T: Copy> From<[T; $n]> for $VectorN<T> {
      #[inline]
      fn from(v: [T; $n]) -> Self {
        let [$($field),+] = v;
        Self { $($field),+ }
      }
    }
    impl<T> From<$VectorN<T>> for [T; $n] {
      #[inline]
      fn from(v: $VectorN<T>) -> Self {
        let $VectorN { $($field),+ } = v;
        [$($field),+]
      }
    }

    impl<T: Debug> fmt::Display for $VectorN<T> {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tuple = f.debug_tuple("");
        $(tuple.field(&self.$field);)+
        tuple.finish()
      }
    }
  };
}
