/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use simplelog::{Config, LevelFilter, TestLogger};

/// Routes `log` records to the test harness output.  Only the first call installs the logger.
pub fn init_test_logging() {
    // A second initialization fails because a logger is already set, which is fine.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
