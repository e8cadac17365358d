/*!
# `QUIT`

## Purpose
Leave BASIC.

## Remarks
The program in memory is lost. End of input does the same.

*/
