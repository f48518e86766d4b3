//! The JNI side of the native library.

use jni::objects::{JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use log::error;

use crate::activity::StringSource;
use crate::NATIVE_GREETING;

/// Backs `MainActivity.stringFromJNI()` on the Java side.
#[no_mangle]
pub extern "system" fn Java_com_dalunlun_testapp_MainActivity_stringFromJNI(
    env: JNIEnv,
    _this: JObject,
) -> jstring {
    match env.new_string(NATIVE_GREETING) {
        Ok(s) => JString::into_raw(s),
        Err(e) => {
            // A Java exception is pending; the caller sees it once we return.
            error!("stringFromJNI: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// In-process string source for the Rust activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeGreeting;

impl StringSource for NativeGreeting {
    fn string_from_jni(&self) -> String {
        NATIVE_GREETING.to_string()
    }
}
