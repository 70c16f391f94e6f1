#![allow(unsafe_code)]
//! File upload and download links.

use std::sync::Arc;

use crate::error::Result;
use crate::ffi::to_c_string;
use crate::handle::{FileModule, HandleOwner, NativeHandle, SubHandle};
use crate::pending::{
    self, NETWORK_FAILURE, Pending, Progress, progress_trampoline, result_trampoline,
    url_trampoline, value_trampoline,
};
use crate::types::FileInfo;

/// File API of one client.
#[derive(Debug, Clone)]
pub struct Files {
    inner: SubHandle<FileModule>,
}

impl Files {
    pub(super) fn new(owner: &Arc<HandleOwner>) -> Self {
        Self {
            inner: SubHandle::new(owner),
        }
    }

    /// The native file module handle.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidState`](crate::Error::InvalidState) after destruction.
    pub fn handle(&self) -> Result<NativeHandle> {
        self.inner.handle()
    }

    /// Upload a local file.
    pub fn upload(&self, local_path: &str, file_type: &str) -> Pending<FileInfo> {
        self.upload_inner(local_path, file_type, None)
    }

    /// Upload a local file, reporting `(uploaded, total)` bytes to
    /// `on_progress` from the native thread until the upload resolves.
    pub fn upload_with_progress(
        &self,
        local_path: &str,
        file_type: &str,
        on_progress: impl Fn(u64, u64) + Send + Sync + 'static,
    ) -> Pending<FileInfo> {
        self.upload_inner(local_path, file_type, Some(Arc::new(on_progress)))
    }

    fn upload_inner(
        &self,
        local_path: &str,
        file_type: &str,
        progress: Option<Progress>,
    ) -> Pending<FileInfo> {
        pending::attempt(|| {
            let local_path = to_c_string(local_path)?;
            let file_type = to_c_string(file_type)?;
            Ok(self.inner.invoke_with_progress(
                NETWORK_FAILURE,
                progress,
                |native, raw, userdata| unsafe {
                    native.file_upload(
                        raw,
                        local_path.as_ptr(),
                        file_type.as_ptr(),
                        userdata,
                        Some(progress_trampoline),
                        Some(value_trampoline::<FileInfo>),
                    )
                },
            ))
        })
    }

    /// A time-limited download URL.
    pub fn download_url(&self, file_id: &str) -> Pending<String> {
        pending::attempt(|| {
            let file_id = to_c_string(file_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.file_get_download_url(raw, file_id.as_ptr(), userdata, Some(url_trampoline))
            }))
        })
    }

    /// Delete an uploaded file.
    pub fn delete(&self, file_id: &str) -> Pending<()> {
        pending::attempt(|| {
            let file_id = to_c_string(file_id)?;
            Ok(self.inner.invoke(NETWORK_FAILURE, |native, raw, userdata| unsafe {
                native.file_delete(raw, file_id.as_ptr(), userdata, Some(result_trampoline))
            }))
        })
    }
}
