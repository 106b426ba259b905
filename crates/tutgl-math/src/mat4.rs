// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::{deg_to_rad, Vec3};

/// Column‑major 4×4 transform matrix.
///
/// - Logical component `m_rc` sits at row `r`, column `c`; storage lists the
///   matrix column by column (`m11, m21, m31, m41, m12, …`), which is exactly
///   the layout `uniformMatrix4fv(…, transpose = false, …)` expects.
/// - Acts on homogeneous column vectors: `v' = M * v`. Translation lives in
///   the fourth column, affine transforms keep the bottom row `(0, 0, 0, 1)`.
/// - `Default` is the identity.
///
/// # Building transforms
/// The `set_*` methods mutate an owned matrix and return `&mut Self` so
/// calls can be chained. Two of them are *overlays*:
/// [`Mat4::set_translation`] and [`Mat4::set_scale`] write only their own
/// components and keep whatever the rest of the matrix already holds. Every
/// other setter overwrites all sixteen components.
///
/// ```
/// use tutgl_math::{Mat4, Vec3};
/// let mut m = Mat4::identity();
/// m.set_scale(2.0).set_translation(5.0, -3.0, 2.0);
/// let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
/// assert_eq!(p.to_array(), [7.0, -1.0, 4.0]);
/// ```
///
/// # Precision
/// `f32` throughout; long composition chains accumulate rounding.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct Mat4 {
    data: [f32; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn from_column_major(data: [f32; 16]) -> Self {
        Self { data }
    }

    /// Returns the matrix flattened column by column.
    ///
    /// This is the only representation handed to the renderer: sixteen
    /// floats, column 1 first (`m11, m21, m31, m41`), then column 2, …
    pub fn to_column_major(&self) -> [f32; 16] {
        self.data
    }

    /// Borrows the column-major storage as raw bytes for a uniform upload.
    pub fn as_column_major_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Component at logical `row`, `col` (both 0-based).
    ///
    /// # Panics
    /// If `row` or `col` is 4 or larger.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "Mat4 index out of range: ({row}, {col})");
        self.data[col * 4 + row]
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.data[col * 4 + row]
    }

    fn put(&mut self, row: usize, col: usize, value: f32) {
        self.data[col * 4 + row] = value;
    }

    /// Overlay: writes the translation column `(m14, m24, m34)` only.
    ///
    /// The upper-left 3×3 and the bottom row keep their current values, so
    /// calling this on a scale or rotation matrix yields "rotate/scale, then
    /// translate" without a separate multiply. On an identity matrix it is a
    /// plain translation.
    pub fn set_translation(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.put(0, 3, x);
        self.put(1, 3, y);
        self.put(2, 3, z);
        self
    }

    /// Overlay: writes the diagonal `(m11, m22, m33)` with `factor`.
    ///
    /// Off-diagonal and translation components are left as they are. On a
    /// rotation matrix this does *not* produce a scaled rotation; compose
    /// with [`Mat4::left_multiply`] for that.
    pub fn set_scale(&mut self, factor: f32) -> &mut Self {
        self.set_scale_xyz(factor, factor, factor)
    }

    /// Overlay: writes `(m11, m22, m33)` with per-axis factors.
    ///
    /// Same partial-write contract as [`Mat4::set_scale`].
    pub fn set_scale_xyz(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.put(0, 0, sx);
        self.put(1, 1, sy);
        self.put(2, 2, sz);
        self
    }

    /// Rotation of `angle` radians about `axis` (Rodrigues' formula).
    ///
    /// Precondition: `axis` has unit length. It is *not* normalized here; a
    /// longer or shorter axis produces a matrix that also scales and shears.
    /// Overwrites all sixteen components; row and column 4 become
    /// `(0, 0, 0, 1)`.
    pub fn set_rotation(&mut self, axis: &Vec3, angle: f32) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;

        self.data = [
            x * x * t + c,  // m11
            xy * t + z * s, // m21
            xz * t - y * s, // m31
            0.0,            // m41
            xy * t - z * s, // m12
            y * y * t + c,  // m22
            yz * t + x * s, // m32
            0.0,            // m42
            xz * t + y * s, // m13
            yz * t - x * s, // m23
            z * z * t + c,  // m33
            0.0,            // m43
            0.0, 0.0, 0.0, 1.0, // col 3
        ];
        self
    }

    /// Symmetric-frustum perspective projection (`left = -right`,
    /// `bottom = -top`), OpenGL conventions.
    ///
    /// View-space `z = -near` maps to NDC `-1`, `z = -far` to `+1`; `m43 = -1`
    /// copies `-z` into `w` for the perspective divide. A point on the near
    /// plane at `(right, top)` lands on NDC `(1, 1)`.
    ///
    /// Preconditions: `right`, `top` non-zero and `near != far`.
    pub fn set_perspective(&mut self, right: f32, top: f32, near: f32, far: f32) -> &mut Self {
        let depth = near - far;
        self.data = [0.0; 16];
        self.put(0, 0, near / right);
        self.put(1, 1, near / top);
        self.put(2, 2, (far + near) / depth);
        self.put(3, 2, -1.0);
        self.put(2, 3, (2.0 * far * near) / depth);
        self
    }

    /// Perspective projection from a vertical field of view in **degrees**.
    ///
    /// Derives `top = near * tan(fov / 2)` and `right = top * aspect`, then
    /// defers to [`Mat4::set_perspective`].
    pub fn set_fov_perspective(
        &mut self,
        vertical_fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        let top = near * (deg_to_rad(vertical_fov_degrees) / 2.0).tan();
        let right = top * aspect;
        self.set_perspective(right, top, near, far)
    }

    /// Perspective projection from the near-plane `width` and `height`.
    ///
    /// Same as [`Mat4::set_perspective`] with `right = width / 2` and
    /// `top = height / 2`.
    pub fn set_perspective_size(
        &mut self,
        width: f32,
        height: f32,
        near: f32,
        far: f32,
    ) -> &mut Self {
        self.set_perspective(width / 2.0, height / 2.0, near, far)
    }

    /// Orthographic (parallel) projection of a `width` × `height` box centred
    /// on the view axis.
    ///
    /// Depth maps linearly: `z = -near` → `-1`, `z = -far` → `+1`. No
    /// perspective divide (`m44 = 1`).
    pub fn set_ortho(&mut self, width: f32, height: f32, near: f32, far: f32) -> &mut Self {
        let depth = near - far;
        self.data = [0.0; 16];
        self.put(0, 0, 2.0 / width);
        self.put(1, 1, 2.0 / height);
        self.put(2, 2, 2.0 / depth);
        self.put(2, 3, (near + far) / depth);
        self.put(3, 3, 1.0);
        self
    }

    /// View matrix looking from `eye` towards `target`.
    ///
    /// Basis construction (order matters and is kept as-is):
    /// - `forward = normalize(target - eye)`
    /// - `right = normalize(forward × normalize(up))`
    /// - `actual_up = right × forward`, which replaces a non-orthogonal `up`.
    ///
    /// Rows of the upper 3×3 are `right`, `actual_up`, `-forward`; the
    /// translation column is `(-right·eye, -actual_up·eye, forward·eye)`, so
    /// `eye` itself maps to the eye-space origin.
    ///
    /// Preconditions: `eye != target` and `up` not parallel to the view
    /// direction; otherwise the basis degenerates to NaN.
    pub fn set_look_at(&mut self, eye: &Vec3, target: &Vec3, up: &Vec3) -> &mut Self {
        let forward = target.sub(eye).normalize();
        let right = forward.cross(&up.normalize()).normalize();
        let actual_up = right.cross(&forward);

        self.data = [
            right.x(),
            actual_up.x(),
            -forward.x(),
            0.0, // col 0
            right.y(),
            actual_up.y(),
            -forward.y(),
            0.0, // col 1
            right.z(),
            actual_up.z(),
            -forward.z(),
            0.0, // col 2
            -right.dot(eye),
            -actual_up.dot(eye),
            forward.dot(eye),
            1.0, // col 3
        ];
        self
    }

    /// Composes in place: `self = self * other`, returning `self`.
    ///
    /// The result applies `other` first, then the old `self`:
    /// `translation.left_multiply(rotation.left_multiply(scale))` scales,
    /// rotates, then translates. Not commutative.
    ///
    /// The product is accumulated into a scratch matrix before `self` is
    /// overwritten, so composing a matrix with itself is well-defined:
    /// `m.left_multiply(m)` squares `m`.
    pub fn left_multiply(&mut self, other: Self) -> &mut Self {
        *self = self.multiply(&other);
        self
    }

    /// Matrix product `self * rhs` as a new value.
    ///
    /// # Examples
    /// ```
    /// use tutgl_math::Mat4;
    /// let a = Mat4::identity();
    /// let b = Mat4::scale(2.0);
    /// assert_eq!(a.multiply(&b).to_column_major(), b.to_column_major());
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::from_column_major(out)
    }

    /// Pure translation matrix (identity with the translation overlay).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut m = Self::identity();
        m.set_translation(x, y, z);
        m
    }

    /// Pure uniform scale matrix.
    pub fn scale(factor: f32) -> Self {
        let mut m = Self::identity();
        m.set_scale(factor);
        m
    }

    /// Pure per-axis scale matrix.
    pub fn scale_xyz(sx: f32, sy: f32, sz: f32) -> Self {
        let mut m = Self::identity();
        m.set_scale_xyz(sx, sy, sz);
        m
    }

    /// Rotation about a unit `axis`; see [`Mat4::set_rotation`].
    pub fn rotation(axis: &Vec3, angle: f32) -> Self {
        let mut m = Self::identity();
        m.set_rotation(axis, angle);
        m
    }

    /// See [`Mat4::set_perspective`].
    pub fn perspective(right: f32, top: f32, near: f32, far: f32) -> Self {
        let mut m = Self::identity();
        m.set_perspective(right, top, near, far);
        m
    }

    /// See [`Mat4::set_fov_perspective`].
    pub fn fov_perspective(vertical_fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut m = Self::identity();
        m.set_fov_perspective(vertical_fov_degrees, aspect, near, far);
        m
    }

    /// See [`Mat4::set_perspective_size`].
    pub fn perspective_size(width: f32, height: f32, near: f32, far: f32) -> Self {
        let mut m = Self::identity();
        m.set_perspective_size(width, height, near, far);
        m
    }

    /// See [`Mat4::set_ortho`].
    pub fn ortho(width: f32, height: f32, near: f32, far: f32) -> Self {
        let mut m = Self::identity();
        m.set_ortho(width, height, near, far);
        m
    }

    /// See [`Mat4::set_look_at`].
    pub fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Self {
        let mut m = Self::identity();
        m.set_look_at(eye, target, up);
        m
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let mut out = Self::identity();
        for row in 0..4 {
            for col in 0..4 {
                out.put(col, row, self.at(row, col));
            }
        }
        out
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let mut det = 0.0;
        let mut sign = 1.0;
        for col in 0..4 {
            det += sign * self.at(0, col) * self.minor3(0, col);
            sign = -sign;
        }
        det
    }

    /// Determinant of the 3×3 matrix left after removing `skip_row`/`skip_col`.
    fn minor3(&self, skip_row: usize, skip_col: usize) -> f32 {
        let mut m = [0.0_f32; 9];
        let mut i = 0;
        for row in (0..4).filter(|&r| r != skip_row) {
            for col in (0..4).filter(|&c| c != skip_col) {
                m[i] = self.at(row, col);
                i += 1;
            }
        }
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Multiplies a homogeneous column vector: `M * [x, y, z, w]`.
    pub fn transform_homogeneous(&self, v: [f32; 4]) -> [f32; 4] {
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|k| self.at(row, k) * v[k]).sum();
        }
        out
    }

    /// Transforms a point (`w = 1`) and drops the resulting `w`.
    ///
    /// No perspective divide; use [`Mat4::project_point`] for projections.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, _] = self.transform_homogeneous([point.x(), point.y(), point.z(), 1.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a direction (`w = 0`); translation has no effect.
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        let [x, y, z, _] =
            self.transform_homogeneous([direction.x(), direction.y(), direction.z(), 0.0]);
        Vec3::new(x, y, z)
    }

    /// Transforms a point (`w = 1`) and applies the perspective divide.
    ///
    /// For a projection matrix the result is in normalized device
    /// coordinates. A resulting `w` of zero yields Inf/NaN.
    pub fn project_point(&self, point: &Vec3) -> Vec3 {
        let [x, y, z, w] = self.transform_homogeneous([point.x(), point.y(), point.z(), 1.0]);
        Vec3::new(x / w, y / w, z / w)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::from_column_major(value)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(value: Mat4) -> Self {
        value.data
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        self.left_multiply(rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        self.left_multiply(*rhs);
    }
}
